/// Top-level sections reachable from the top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Events,
    Me,
    Users,
    Config,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Events, Section::Me, Section::Users, Section::Config];

    pub fn label(self) -> &'static str {
        match self {
            Section::Events => "Events",
            Section::Me => "Me",
            Section::Users => "Users",
            Section::Config => "Config",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// State management for UI-specific state
pub struct UiState {
    pub section: Section,
    pub should_quit: bool,
    pub tick_count: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            section: Section::Events,
            should_quit: false,
            tick_count: 0,
        }
    }
}

impl UiState {
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick(&mut self) {
        self.tick_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_cycle_wraps() {
        assert_eq!(Section::Config.next(), Section::Events);
        assert_eq!(Section::Events.prev(), Section::Config);
        assert_eq!(Section::Me.next(), Section::Users);
    }
}
