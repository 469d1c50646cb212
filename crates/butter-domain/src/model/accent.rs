//! Accent - The regional accents the demo claims to recognise
//!
//! Nothing here does recognition. Accents are a fixed catalogue with display
//! names and scripted conversation examples.

/// The accents offered in the demo selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Scottish,
    Welsh,
    NorthernIrish,
    Geordie,
    Yorkshire,
    Cornish,
    Brummie,
    Scouse,
    Devon,
    Norfolk,
    Cockney,
    ReceivedPronunciation,
    WestCountry,
    Midlands,
}

impl Accent {
    /// Identifier used in the selector and on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            Accent::Scottish => "scottish",
            Accent::Welsh => "welsh",
            Accent::NorthernIrish => "northern-irish",
            Accent::Geordie => "geordie",
            Accent::Yorkshire => "yorkshire",
            Accent::Cornish => "cornish",
            Accent::Brummie => "brummie",
            Accent::Scouse => "scouse",
            Accent::Devon => "devon",
            Accent::Norfolk => "norfolk",
            Accent::Cockney => "cockney",
            Accent::ReceivedPronunciation => "rp",
            Accent::WestCountry => "west-country",
            Accent::Midlands => "midlands",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Accent::Scottish => "Scottish",
            Accent::Welsh => "Welsh",
            Accent::NorthernIrish => "Northern Irish",
            Accent::Geordie => "Geordie",
            Accent::Yorkshire => "Yorkshire",
            Accent::Cornish => "Cornish",
            Accent::Brummie => "Brummie",
            Accent::Scouse => "Scouse",
            Accent::Devon => "Devon",
            Accent::Norfolk => "Norfolk",
            Accent::Cockney => "Cockney",
            Accent::ReceivedPronunciation => "Received Pronunciation",
            Accent::WestCountry => "West Country",
            Accent::Midlands => "Midlands",
        }
    }

    /// Look up an accent by slug
    pub fn from_slug(slug: &str) -> Option<Accent> {
        Accent::all().iter().copied().find(|a| a.slug() == slug)
    }

    /// Display name for a slug that may not be in the catalogue
    pub fn display_name_for(slug: &str) -> &'static str {
        Accent::from_slug(slug)
            .map(|a| a.display_name())
            .unwrap_or("Unknown")
    }

    /// Get all accents in selector order
    pub fn all() -> &'static [Accent] {
        &[
            Accent::Scottish,
            Accent::Welsh,
            Accent::NorthernIrish,
            Accent::Geordie,
            Accent::Yorkshire,
            Accent::Cornish,
            Accent::Brummie,
            Accent::Scouse,
            Accent::Devon,
            Accent::Norfolk,
            Accent::Cockney,
            Accent::ReceivedPronunciation,
            Accent::WestCountry,
            Accent::Midlands,
        ]
    }

    /// Scripted exchange shown after a demo run
    pub fn conversation(&self) -> ConversationExample {
        match self {
            Accent::Scottish => ConversationExample {
                user: "Och, I cannae get intae my account".to_string(),
                user_note: "(Scottish accent detected)".to_string(),
                ai: "I understand you're having trouble accessing your account. \
                     Let me help you with that right away."
                    .to_string(),
                ai_note: "(Response adapted for Scottish dialect patterns)".to_string(),
            },
            Accent::Geordie => ConversationExample {
                user: "Howay man, me account's not working".to_string(),
                user_note: "(Geordie accent detected)".to_string(),
                ai: "I can see you're having issues with your account. \
                     Let me sort that out for you."
                    .to_string(),
                ai_note: "(Response adapted for Geordie dialect patterns)".to_string(),
            },
            Accent::Welsh => ConversationExample {
                user: "Right then, my account isn't working properly".to_string(),
                user_note: "(Welsh accent detected)".to_string(),
                ai: "I understand there's a problem with your account. \
                     I'll help you resolve this straight away."
                    .to_string(),
                ai_note: "(Response adapted for Welsh dialect patterns)".to_string(),
            },
            other => ConversationExample::generic(other.slug()),
        }
    }
}

impl core::fmt::Display for Accent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A user line and the AI reply, each with an annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationExample {
    pub user: String,
    pub user_note: String,
    pub ai: String,
    pub ai_note: String,
}

impl ConversationExample {
    /// Fallback exchange for accents without a bespoke script
    pub fn generic(slug: &str) -> Self {
        // Only the first hyphen becomes a space
        let spoken = slug.replacen('-', " ", 1);
        Self {
            user: "Hello, I need help with my account".to_string(),
            user_note: format!("({} accent detected)", spoken),
            ai: "Hello! I'd be happy to help you with your account. \
                 Can you please provide your account number?"
                .to_string(),
            ai_note: format!("(Response adapted for {} accent patterns)", spoken),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_size() {
        assert_eq!(Accent::all().len(), 14);
    }

    #[test]
    fn test_slug_round_trip_for_catalogue() {
        for accent in Accent::all() {
            assert_eq!(Accent::from_slug(accent.slug()), Some(*accent));
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Accent::ReceivedPronunciation.display_name(), "Received Pronunciation");
        assert_eq!(Accent::display_name_for("west-country"), "West Country");
        assert_eq!(Accent::display_name_for("klingon"), "Unknown");
    }

    #[test]
    fn test_bespoke_conversation() {
        let example = Accent::Geordie.conversation();
        assert!(example.user.starts_with("Howay man"));
        assert_eq!(example.user_note, "(Geordie accent detected)");
    }

    #[test]
    fn test_generic_conversation_mentions_slug() {
        let example = Accent::NorthernIrish.conversation();
        assert_eq!(example.user, "Hello, I need help with my account");
        assert_eq!(example.user_note, "(northern irish accent detected)");
        assert_eq!(
            example.ai_note,
            "(Response adapted for northern irish accent patterns)"
        );
    }

    #[test]
    fn test_generic_replaces_first_hyphen_only() {
        let example = ConversationExample::generic("a-b-c");
        assert_eq!(example.user_note, "(a b-c accent detected)");
    }
}
