use serde::{Deserialize, Serialize};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "sw")]
    Swahili,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Swahili,
            Language::Swahili => Language::English,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Language::English => "en",
            Language::Swahili => "sw",
        }
    }
}

const EN: &[(&str, &str)] = &[
    ("nav.bills", "Bills"),
    ("nav.resources", "Resources"),
    ("nav.discussions", "Discussions"),
    ("nav.campaigns", "Campaigns"),
    ("nav.volunteer", "Volunteer"),
    ("nav.notifications", "Notifications"),
    ("nav.profile", "Profile"),
    ("app.title", "CEKA · Civic Education Kenya"),
    ("widget.button", "♥ Support CEKA"),
    ("widget.title", "Support Civic Education"),
    ("widget.body", "CEKA is free for every Kenyan. Your contribution keeps bills, guides and discussions open to all."),
    ("widget.close", "Esc: close"),
    ("widget.support_link", "Support CEKA"),
    ("list.empty", "No items match the current filters"),
    ("list.loading", "Loading..."),
    ("list.load_more", "more"),
    ("search.title", "Search"),
    ("source.live", "Live"),
    ("source.cache", "Cached"),
    ("source.demo", "Demo data"),
    ("feedback.title", "Send feedback"),
    ("feedback.sent", "Thank you for your feedback"),
    ("feedback.empty", "Feedback message is empty"),
    ("notification.marked_read", "Notification marked as read"),
    ("profile.signed_out", "Not signed in. Use --email to sign in."),
    ("profile.name", "Name"),
    ("profile.email", "Email"),
    ("profile.county", "County"),
    ("profile.bio", "Bio"),
    ("settings.theme", "Theme"),
    ("settings.language", "Language"),
    ("feedback.category", "Category"),
    ("feedback.rating", "Rating"),
    ("feedback.message", "Message"),
    ("feedback.hint", "Tab: next field · ←/→: change · Enter: send · Esc: cancel"),
    ("list.sort", "Sort"),
    ("list.category", "Category"),
    ("list.type", "Type"),
    ("status.disconnected", "Offline"),
    ("status.unread", "unread"),
];

const SW: &[(&str, &str)] = &[
    ("nav.bills", "Miswada"),
    ("nav.resources", "Rasilimali"),
    ("nav.discussions", "Majadiliano"),
    ("nav.campaigns", "Kampeni"),
    ("nav.volunteer", "Kujitolea"),
    ("nav.notifications", "Arifa"),
    ("nav.profile", "Wasifu"),
    ("app.title", "CEKA · Elimu ya Uraia Kenya"),
    ("widget.button", "♥ Saidia CEKA"),
    ("widget.title", "Saidia Elimu ya Uraia"),
    ("widget.body", "CEKA ni bure kwa kila Mkenya. Mchango wako unaweka miswada, miongozo na majadiliano wazi kwa wote."),
    ("widget.close", "Esc: funga"),
    ("widget.support_link", "Saidia CEKA"),
    ("list.empty", "Hakuna vipengee vinavyolingana na vichujio"),
    ("list.loading", "Inapakia..."),
    ("list.load_more", "zaidi"),
    ("search.title", "Tafuta"),
    ("source.live", "Moja kwa moja"),
    ("source.cache", "Kutoka hifadhi"),
    ("source.demo", "Data ya mfano"),
    ("feedback.title", "Tuma maoni"),
    ("feedback.sent", "Asante kwa maoni yako"),
    ("feedback.empty", "Ujumbe wa maoni ni mtupu"),
    ("notification.marked_read", "Arifa imewekwa kama imesomwa"),
    ("profile.signed_out", "Hujaingia. Tumia --email kuingia."),
    ("profile.name", "Jina"),
    ("profile.email", "Barua pepe"),
    ("profile.county", "Kaunti"),
    ("profile.bio", "Maelezo"),
    ("settings.theme", "Mandhari"),
    ("settings.language", "Lugha"),
    ("feedback.category", "Aina"),
    ("feedback.rating", "Ukadiriaji"),
    ("feedback.message", "Ujumbe"),
    ("feedback.hint", "Tab: sehemu inayofuata · ←/→: badilisha · Enter: tuma · Esc: ghairi"),
    ("list.sort", "Panga"),
    ("list.category", "Kategoria"),
    ("list.type", "Aina"),
    ("status.disconnected", "Nje ya mtandao"),
    ("status.unread", "hazijasomwa"),
];

fn table(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::English => EN,
        Language::Swahili => SW,
    }
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    table(language)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Translate a UI key
///
/// Missing keys fall back to English, then to the key itself.
///
/// # Examples
/// ```
/// use ceka::context::{translate, Language};
///
/// assert_eq!(translate(Language::Swahili, "nav.bills"), "Miswada");
/// assert_eq!(translate(Language::English, "nav.bills"), "Bills");
/// assert_eq!(translate(Language::Swahili, "no.such.key"), "no.such.key");
/// ```
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    lookup(language, key)
        .or_else(|| lookup(Language::English, key))
        .unwrap_or(key)
}

#[derive(Debug)]
pub struct LanguageStore {
    tx: watch::Sender<Language>,
}

impl LanguageStore {
    pub fn new(initial: Language) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.tx.subscribe()
    }

    pub fn current(&self) -> Language {
        *self.tx.borrow()
    }

    pub fn set(&self, language: Language) {
        self.tx.send_replace(language);
    }

    pub fn toggle(&self) -> Language {
        let next = self.current().toggled();
        self.set(next);
        next
    }

    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        translate(self.current(), key)
    }
}
