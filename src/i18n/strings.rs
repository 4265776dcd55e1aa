use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Keys for every label the list view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    Users,
    NextPage,
    PreviousPage,
}

impl LabelKey {
    pub const ALL: [LabelKey; 3] = [LabelKey::Users, LabelKey::NextPage, LabelKey::PreviousPage];

    /// Name used in locale tables on the wire (e.g., "nextPage").
    pub fn name(&self) -> &'static str {
        match self {
            LabelKey::Users => "users",
            LabelKey::NextPage => "nextPage",
            LabelKey::PreviousPage => "previousPage",
        }
    }
}

impl fmt::Display for LabelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LabelKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LabelKey::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown label key: '{}'", s))
    }
}

/// All localized labels for a language.
///
/// Serializes to the flat `{ users, nextPage, previousPage }` table served by
/// the locales endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStrings {
    /// Header above the user list
    pub users: &'static str,

    /// Link to the following page
    pub next_page: &'static str,

    /// Link to the preceding page
    pub previous_page: &'static str,
}

impl LanguageStrings {
    pub fn get(&self, key: LabelKey) -> &'static str {
        match key {
            LabelKey::Users => self.users,
            LabelKey::NextPage => self.next_page,
            LabelKey::PreviousPage => self.previous_page,
        }
    }
}

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    users: "Users",
    next_page: "next >",
    previous_page: "< previous",
};

// ==================== Turkish Strings ====================

pub const TURKISH_STRINGS: LanguageStrings = LanguageStrings {
    users: "Kullanıcılar",
    next_page: "sonraki >",
    previous_page: "< önceki",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_maps_every_key() {
        assert_eq!(ENGLISH_STRINGS.get(LabelKey::Users), "Users");
        assert_eq!(ENGLISH_STRINGS.get(LabelKey::NextPage), "next >");
        assert_eq!(ENGLISH_STRINGS.get(LabelKey::PreviousPage), "< previous");
    }

    #[test]
    fn test_turkish_differs_from_english_for_every_key() {
        for key in LabelKey::ALL {
            assert_ne!(ENGLISH_STRINGS.get(key), TURKISH_STRINGS.get(key), "{}", key);
        }
    }

    #[test]
    fn test_label_key_round_trips_through_name() {
        for key in LabelKey::ALL {
            assert_eq!(key.name().parse::<LabelKey>().expect("Should parse"), key);
        }
    }

    #[test]
    fn test_label_key_unknown_name() {
        let err = "footer".parse::<LabelKey>().unwrap_err();
        assert!(err.to_string().contains("Unknown label key"));
    }

    #[test]
    fn test_strings_serialize_to_locale_table() {
        let json = serde_json::to_value(&TURKISH_STRINGS).expect("Should serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "users": "Kullanıcılar",
                "nextPage": "sonraki >",
                "previousPage": "< önceki"
            })
        );
    }
}
