use mson_ast::SourceMap;

/// Conditions that do not abort conversion but are worth surfacing (§6.3,
/// §7's warn-kind rows). Plain data — rendering is an external collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub text: String,
    pub kind: WarningKind,
    pub source_map: SourceMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    Mson,
    Application,
}

impl Warning {
    /// Wording differs per §4.3.1: `boolean` gets the allowed-values hint,
    /// everything else ("number" is the only other caller today) gets the
    /// generic "invalid format" phrasing.
    pub fn invalid_literal(base_type: &str, source_map: SourceMap) -> Warning {
        let text = if base_type == "boolean" {
            "invalid value for 'boolean' type".to_string()
        } else {
            format!("invalid value format for '{base_type}' type")
        };
        Warning { text, kind: WarningKind::Mson, source_map }
    }

    pub fn attr_clash(a: &str, b: &str, source_map: SourceMap) -> Warning {
        Warning {
            text: format!("type attributes '{a}' and '{b}' are mutually exclusive"),
            kind: WarningKind::Mson,
            source_map,
        }
    }

    pub fn orphan_default_sample(keyword: &str, source_map: SourceMap) -> Warning {
        Warning {
            text: format!("no value present when '{keyword}' is specified"),
            kind: WarningKind::Mson,
            source_map,
        }
    }
}
