use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A reason name that does not belong to the enumeration it was parsed as
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: {value}")]
pub struct ParseReasonError {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a closed reason enumeration whose members carry an explicit
/// wire code and schema name.
macro_rules! reason_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => ($wire_name:literal, $code:literal), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every member, in schema order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable integer written to the metrics record
            pub fn code(self) -> i32 {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            /// Schema name of the member
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $wire_name, )+
                }
            }

            pub fn from_code(code: i32) -> Option<Self> {
                Self::ALL.iter().copied().find(|r| r.code() == code)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = ParseReasonError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|r| r.name().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| ParseReasonError {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

reason_enum! {
    /// Why desktop mode was entered
    EnterReason, "enter reason" {
        UnknownEnter => ("UNKNOWN_ENTER", 0),
        Overview => ("OVERVIEW", 1),
        AppHandleDrag => ("APP_HANDLE_DRAG", 2),
        AppHandleMenuButton => ("APP_HANDLE_MENU_BUTTON", 3),
        AppFreeformIntent => ("APP_FREEFORM_INTENT", 4),
        KeyboardShortcutEnter => ("KEYBOARD_SHORTCUT_ENTER", 5),
        ScreenOn => ("SCREEN_ON", 6),
        AppFromOverview => ("APP_FROM_OVERVIEW", 7),
    }
}

reason_enum! {
    /// Why desktop mode was exited
    ExitReason, "exit reason" {
        UnknownExit => ("UNKNOWN_EXIT", 0),
        DragToExit => ("DRAG_TO_EXIT", 1),
        AppHandleMenuButtonExit => ("APP_HANDLE_MENU_BUTTON_EXIT", 2),
        KeyboardShortcutExit => ("KEYBOARD_SHORTCUT_EXIT", 3),
        ReturnHomeOrOverview => ("RETURN_HOME_OR_OVERVIEW", 4),
        TaskFinished => ("TASK_FINISHED", 5),
        ScreenOff => ("SCREEN_OFF", 6),
    }
}

reason_enum! {
    /// The reason a task was minimized
    MinimizeReason, "minimize reason" {
        /// Minimized to stay within the visible task limit
        TaskLimit => ("TASK_LIMIT", 1),
        MinimizeButton => ("MINIMIZE_BUTTON", 2),
    }
}

reason_enum! {
    /// The reason a task was unminimized
    UnminimizeReason, "unminimize reason" {
        Unknown => ("UNKNOWN", 1),
        TaskbarTap => ("TASKBAR_TAP", 2),
        AltTab => ("ALT_TAB", 3),
        TaskLaunch => ("TASK_LAUNCH", 4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{UNSET_MINIMIZE_REASON, UNSET_UNMINIMIZE_REASON};
    use std::collections::HashSet;

    fn assert_distinct(codes: impl Iterator<Item = i32>) {
        let codes: Vec<i32> = codes.collect();
        let unique: HashSet<i32> = codes.iter().copied().collect();
        assert_eq!(unique.len(), codes.len(), "duplicate wire code in {:?}", codes);
    }

    #[test]
    fn test_wire_codes_are_pairwise_distinct() {
        assert_distinct(EnterReason::ALL.iter().map(|r| r.code()));
        assert_distinct(ExitReason::ALL.iter().map(|r| r.code()));
        assert_distinct(MinimizeReason::ALL.iter().map(|r| r.code()));
        assert_distinct(UnminimizeReason::ALL.iter().map(|r| r.code()));
    }

    #[test]
    fn test_all_lists_every_member() {
        assert_eq!(EnterReason::ALL.len(), 8);
        assert_eq!(ExitReason::ALL.len(), 7);
        assert_eq!(MinimizeReason::ALL.len(), 2);
        assert_eq!(UnminimizeReason::ALL.len(), 4);
    }

    #[test]
    fn test_sentinels_never_collide_with_real_codes() {
        assert!(MinimizeReason::ALL
            .iter()
            .all(|r| r.code() != UNSET_MINIMIZE_REASON));
        assert!(UnminimizeReason::ALL
            .iter()
            .all(|r| r.code() != UNSET_UNMINIMIZE_REASON));
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(EnterReason::Overview.code(), 1);
        assert_eq!(EnterReason::AppFromOverview.code(), 7);
        assert_eq!(ExitReason::ScreenOff.code(), 6);
        assert_eq!(MinimizeReason::TaskLimit.code(), 1);
        assert_eq!(UnminimizeReason::TaskLaunch.code(), 4);
    }

    #[test]
    fn test_parse_name_case_insensitive() {
        assert_eq!("SCREEN_OFF".parse::<ExitReason>(), Ok(ExitReason::ScreenOff));
        assert_eq!(
            "keyboard_shortcut_enter".parse::<EnterReason>(),
            Ok(EnterReason::KeyboardShortcutEnter)
        );
        assert_eq!(" alt_tab ".parse::<UnminimizeReason>(), Ok(UnminimizeReason::AltTab));
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "MAXIMIZE_BUTTON".parse::<MinimizeReason>().unwrap_err();
        assert_eq!(err.kind, "minimize reason");
        assert_eq!(err.to_string(), "Unknown minimize reason: MAXIMIZE_BUTTON");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(ExitReason::from_code(4), Some(ExitReason::ReturnHomeOrOverview));
        assert_eq!(MinimizeReason::from_code(UNSET_MINIMIZE_REASON), None);
        assert_eq!(EnterReason::from_code(99), None);
    }

    #[test]
    fn test_serde_uses_schema_name() {
        let json = serde_json::to_string(&EnterReason::AppHandleMenuButton).unwrap();
        assert_eq!(json, r#""APP_HANDLE_MENU_BUTTON""#);
        let reason: UnminimizeReason = serde_json::from_str(r#""TASKBAR_TAP""#).unwrap();
        assert_eq!(reason, UnminimizeReason::TaskbarTap);
        for r in ExitReason::ALL {
            assert_eq!(serde_json::to_string(r).unwrap(), format!("\"{}\"", r.name()));
        }
    }
}
