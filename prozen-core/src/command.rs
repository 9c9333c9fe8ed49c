//! Commands exposed to the host's command palette.

/// A host command: stable identifier plus display name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Command {
    pub id: &'static str,
    pub name: &'static str,
}

/// Toggle zen mode on the active view.
pub const ZEN_MODE: Command = Command {
    id: "zenmode",
    name: "Zen mode",
};

pub const COMMANDS: &[Command] = &[ZEN_MODE];

impl Command {
    pub fn find(id: &str) -> Option<Command> {
        COMMANDS.iter().copied().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_zen_mode() {
        assert_eq!(Command::find("zenmode"), Some(ZEN_MODE));
        assert_eq!(ZEN_MODE.name, "Zen mode");
    }

    #[test]
    fn find_unknown() {
        assert_eq!(Command::find("zen-mode"), None);
        assert_eq!(Command::find(""), None);
    }
}
