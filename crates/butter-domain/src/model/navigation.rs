//! Navigation - Which page section is showing
//!
//! The landing page is a single page with one visible section at a time.
//! NavigationState is the explicit record of that, plus the mobile menu.

use std::time::Duration;

/// Page sections, in nav bar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Demo,
    Architecture,
    Roi,
    Contact,
}

impl Section {
    /// Anchor id (`#demo`)
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Demo => "demo",
            Section::Architecture => "architecture",
            Section::Roi => "roi",
            Section::Contact => "contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Demo => "Live Demo",
            Section::Architecture => "Architecture",
            Section::Roi => "ROI Calculator",
            Section::Contact => "Contact",
        }
    }

    /// Parse an id, with or without the leading `#`
    pub fn from_id(id: &str) -> Option<Section> {
        let id = id.strip_prefix('#').unwrap_or(id);
        Section::all().iter().copied().find(|s| s.id() == id)
    }

    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::Demo,
            Section::Architecture,
            Section::Roi,
            Section::Contact,
        ]
    }

    /// Animation kicked off when this section becomes visible
    pub fn entry_animation(&self) -> Option<SectionAnimation> {
        match self {
            Section::Home => Some(SectionAnimation::AccuracyBars),
            Section::Demo => Some(SectionAnimation::Waveform),
            _ => None,
        }
    }
}

impl core::fmt::Display for Section {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Animations tied to a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionAnimation {
    /// Accuracy comparison bars fill up
    AccuracyBars,
    /// Demo waveform starts moving
    Waveform,
}

/// Section switch settles for this long before animations are scheduled
pub const SECTION_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Further delay before the entry animation starts
pub const ANIMATION_START_DELAY: Duration = Duration::from_millis(200);

/// Delay before the accuracy bars fill when the page first loads
pub const LANDING_ANIMATION_DELAY: Duration = Duration::from_millis(500);

/// Buttons in the hero banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroButton {
    TryDemo,
    LearnMore,
}

impl HeroButton {
    pub fn target(&self) -> Section {
        match self {
            HeroButton::TryDemo => Section::Demo,
            HeroButton::LearnMore => Section::Architecture,
        }
    }
}

/// What happened as a result of navigating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub section: Section,
    /// Animation to run and how long to wait before starting it
    pub animation: Option<(Duration, SectionAnimation)>,
}

/// Current page state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current: Section,
    menu_open: bool,
}

impl NavigationState {
    /// Start on the home section with the menu closed
    pub fn new() -> Self {
        Self {
            current: Section::Home,
            menu_open: false,
        }
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether a section is the visible one
    pub fn is_visible(&self, section: Section) -> bool {
        self.current == section
    }

    /// Whether the nav link for a section carries the active marker
    pub fn is_link_active(&self, section: Section) -> bool {
        self.is_visible(section)
    }

    // ========== State Transitions ==========

    /// Show a section and hide every other one
    pub fn navigate(&mut self, section: Section) -> Navigation {
        self.current = section;
        self.menu_open = false;

        Navigation {
            section,
            animation: section
                .entry_animation()
                .map(|a| (SECTION_SETTLE_DELAY + ANIMATION_START_DELAY, a)),
        }
    }

    /// First page load: show home and fill the accuracy bars
    ///
    /// The home entry animation would also fire after the settle delay; both
    /// reset the bars to zero, so only the later one is reported.
    pub fn land(&mut self) -> Navigation {
        let navigation = self.navigate(Section::Home);
        Navigation {
            animation: Some((LANDING_ANIMATION_DELAY, SectionAnimation::AccuracyBars)),
            ..navigation
        }
    }

    /// Navigate by anchor id; unknown ids leave the state untouched
    pub fn navigate_to(&mut self, id: &str) -> Result<Navigation, NavigationError> {
        let section = Section::from_id(id).ok_or_else(|| NavigationError::UnknownSection {
            id: id.to_string(),
        })?;
        Ok(self.navigate(section))
    }

    pub fn press(&mut self, button: HeroButton) -> Navigation {
        self.navigate(button.target())
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A click landed outside the menu and its toggle
    pub fn click_outside(&mut self) {
        self.menu_open = false;
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur during navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    UnknownSection { id: String },
}

impl core::fmt::Display for NavigationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NavigationError::UnknownSection { id } => {
                write!(f, "Unknown section: {}", id)
            }
        }
    }
}
