//! Built-in demo rows used when no backend is configured

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::api::{
    Bill, Campaign, Discussion, Notification, Profile, Resource, VolunteerOpportunity,
};

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn days_ago(days: i64) -> DateTime<Utc> {
    base() - Duration::days(days)
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

pub fn bills() -> Vec<Bill> {
    let rows = [
        ("b1", "Finance Bill 2024", "Proposes new taxes on bread, mobile money transfers and motor vehicles.", "Withdrawn", "finance", "National Treasury", &["tax", "budget"][..], 48_210, 3),
        ("b2", "Affordable Housing Bill", "Establishes the housing levy fund and its governance.", "Passed", "housing", "Housing Committee", &["levy", "housing"][..], 21_400, 12),
        ("b3", "Public Participation Bill", "Sets minimum standards for county and national public participation.", "Second Reading", "governance", "Senate", &["participation", "counties"][..], 9_870, 20),
        ("b4", "Climate Change (Amendment) Bill", "Introduces carbon market regulations.", "Committee Stage", "environment", "Environment Committee", &["climate", "carbon"][..], 6_120, 35),
        ("b5", "Social Health Insurance Bill", "Replaces NHIF with the Social Health Authority.", "Passed", "health", "Health Committee", &["health", "insurance"][..], 15_300, 60),
    ];
    rows.iter()
        .map(|(id, title, summary, status, category, sponsor, t, views, age)| Bill {
            id: id.to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
            status: status.to_string(),
            category: category.to_string(),
            sponsor: sponsor.to_string(),
            tags: tags(t),
            views: *views,
            created_at: days_ago(*age),
        })
        .collect()
}

pub fn resources() -> Vec<Resource> {
    let rows = [
        ("r1", "The Constitution of Kenya, 2010", "Full text of the constitution with a plain-language guide.", "document", "constitution", &["constitution", "rights"][..], 12_400, 5_200, 90),
        ("r2", "How a Bill Becomes Law", "Animated walkthrough of the legislative process.", "video", "legislation", &["parliament", "process"][..], 8_900, 0, 14),
        ("r3", "County Budget Cycle", "Infographic of the county budget calendar.", "infographic", "governance", &["budget", "counties"][..], 3_100, 1_450, 30),
        ("r4", "Know Your Rights: Arrest", "What to do when arrested, in English and Kiswahili.", "document", "rights", &["rights", "police"][..], 7_750, 3_300, 7),
        ("r5", "Devolution Explained", "Podcast episode on the two levels of government.", "audio", "governance", &["devolution", "counties"][..], 2_050, 640, 45),
        ("r6", "Public Participation Toolkit", "Templates for submitting memoranda to Parliament.", "document", "participation", &["participation", "memoranda"][..], 4_200, 2_980, 3),
    ];
    rows.iter()
        .map(|(id, title, description, kind, category, t, views, downloads, age)| Resource {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            resource_type: kind.to_string(),
            category: category.to_string(),
            tags: tags(t),
            url: Some(format!("https://ceka.co.ke/resources/{}", id)),
            views: *views,
            downloads: *downloads,
            created_at: days_ago(*age),
        })
        .collect()
}

pub fn discussions() -> Vec<Discussion> {
    let rows = [
        ("d1", "Should the housing levy be voluntary?", "The levy is now law. Should contributions be opt-in?", "housing", &["housing", "levy"][..], "Wanjiru K.", 134, 5_600, 2),
        ("d2", "Ideas for youth turnout in 2027", "Share what works in your county.", "elections", &["youth", "elections"][..], "Otieno M.", 88, 3_200, 5),
        ("d3", "Understanding county budgets", "Where can we find county budget documents?", "governance", &["budget", "counties"][..], "Amina H.", 21, 900, 11),
        ("d4", "Climate bill and farmers", "How will carbon credits affect smallholder farmers?", "environment", &["climate", "agriculture"][..], "Kiprono C.", 47, 1_850, 19),
    ];
    rows.iter()
        .map(|(id, title, content, category, t, author, replies, views, age)| Discussion {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            category: category.to_string(),
            tags: tags(t),
            author: author.to_string(),
            replies: *replies,
            views: *views,
            created_at: days_ago(*age),
        })
        .collect()
}

pub fn campaigns() -> Vec<Campaign> {
    let rows = [
        ("c1", "Reject Unfair Taxes", "Petition for a people-centred finance bill.", "finance", 50_000, 61_200, "completed", 40),
        ("c2", "Clean Water for Turkana", "Push county leaders to fund borehole maintenance.", "environment", 10_000, 4_350, "active", 9),
        ("c3", "Open County Budgets", "Demand that every county publishes its budget online.", "governance", 20_000, 12_800, "active", 16),
    ];
    rows.iter()
        .map(|(id, title, description, category, goal, supporters, status, age)| Campaign {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            goal: *goal,
            supporters: *supporters,
            status: status.to_string(),
            ends_at: Some(days_ago(*age) + Duration::days(60)),
            created_at: days_ago(*age),
        })
        .collect()
}

pub fn volunteer_opportunities() -> Vec<VolunteerOpportunity> {
    let rows = [
        ("v1", "Civic Education Facilitator", "CEKA", "Run community sessions on the constitution.", "Nairobi", "in-person", "education", 10),
        ("v2", "Content Translator (Kiswahili)", "CEKA", "Translate explainers into Kiswahili.", "Anywhere", "remote", "content", 4),
        ("v3", "Budget Tracker", "Open Counties Network", "Follow county budget hearings and report.", "Kisumu", "hybrid", "governance", 21),
    ];
    rows.iter()
        .map(|(id, title, organization, description, location, commitment, category, age)| {
            VolunteerOpportunity {
                id: id.to_string(),
                title: title.to_string(),
                organization: organization.to_string(),
                description: description.to_string(),
                location: location.to_string(),
                commitment: commitment.to_string(),
                category: category.to_string(),
                date: Some(days_ago(*age) + Duration::days(30)),
                created_at: days_ago(*age),
            }
        })
        .collect()
}

pub fn notifications(user_id: &str) -> Vec<Notification> {
    let rows = [
        ("n1", "Finance Bill 2024 withdrawn", "A bill you follow changed status.", "bill_update", false, 1),
        ("n2", "New reply in housing levy thread", "Otieno M. replied to your comment.", "discussion_reply", false, 2),
        ("n3", "Welcome to CEKA", "Start by exploring the resource library.", "system", true, 30),
    ];
    rows.iter()
        .map(|(id, title, message, kind, read, age)| Notification {
            id: id.to_string(),
            user_id: user_id.to_string(),
            title: title.to_string(),
            message: message.to_string(),
            kind: kind.to_string(),
            read: *read,
            created_at: days_ago(*age),
        })
        .collect()
}

pub fn profile(user_id: &str) -> Profile {
    Profile {
        id: user_id.to_string(),
        full_name: Some("Demo Citizen".to_string()),
        email: Some("demo@ceka.co.ke".to_string()),
        county: Some("Nairobi".to_string()),
        bio: Some("Exploring CEKA in demo mode.".to_string()),
        created_at: Some(days_ago(100)),
    }
}
