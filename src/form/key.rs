use once_cell::sync::Lazy;
use regex::Regex;

/// `Group[Index][SubField]`, ASCII word characters only.
static INDEXED_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9_]+)\[([0-9]+)\]\[([A-Za-z0-9_]+)\]$").unwrap());

/// Parsed shape of an incoming form field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKey<'a> {
    /// Top-level field. Also used for every name that does not match the
    /// indexed pattern, including bracketed names such as `a[b]`.
    Scalar(&'a str),
    /// One sub-field of one entry in a repeatable group.
    Indexed {
        group: &'a str,
        index: usize,
        sub_field: &'a str,
    },
}

impl<'a> FieldKey<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            FieldKey::Scalar(name) => name,
            FieldKey::Indexed { group, .. } => group,
        }
    }
}

/// Classify a field name. Never fails: anything that is not a well-formed
/// indexed key, or whose index does not fit in `max_index`, is a scalar.
pub fn parse_field_key(raw: &str, max_index: usize) -> FieldKey<'_> {
    let Some(caps) = INDEXED_KEY.captures(raw) else {
        return FieldKey::Scalar(raw);
    };
    let (Some(group), Some(index), Some(sub_field)) = (caps.get(1), caps.get(2), caps.get(3)) else {
        return FieldKey::Scalar(raw);
    };
    match index.as_str().parse::<usize>() {
        Ok(index) if index <= max_index => FieldKey::Indexed {
            group: group.as_str(),
            index,
            sub_field: sub_field.as_str(),
        },
        _ => {
            tracing::warn!(key = raw, max_index, "Group index out of range; keeping field as a literal scalar");
            FieldKey::Scalar(raw)
        }
    }
}

/// True for names the browser meant as structured but which did not parse.
/// These are stored verbatim and overwrite rather than accumulate.
pub fn is_bracketed(raw: &str) -> bool {
    raw.contains('[') && raw.contains(']')
}

/// Inverse of [`parse_field_key`] for indexed fields.
pub fn indexed_key(group: &str, index: usize, sub_field: &str) -> String {
    format!("{}[{}][{}]", group, index, sub_field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name_is_scalar() {
        assert_eq!(parse_field_key("Email_Address", 100), FieldKey::Scalar("Email_Address"));
    }

    #[test]
    fn indexed_name_is_split() {
        assert_eq!(
            parse_field_key("Experience[3][CompanyName]", 100),
            FieldKey::Indexed { group: "Experience", index: 3, sub_field: "CompanyName" }
        );
    }

    #[test]
    fn malformed_bracket_names_fall_back_to_scalar() {
        for raw in [
            "Experience[0]",
            "Experience[x][CompanyName]",
            "Experience[-1][CompanyName]",
            "Experience[0][Company Name]",
            "[0][CompanyName]",
            "Experience[0][CompanyName]extra",
            "Experience[0][a][b]",
            "Expérience[0][Nom]",
        ] {
            assert_eq!(parse_field_key(raw, 100), FieldKey::Scalar(raw), "{}", raw);
        }
    }

    #[test]
    fn index_above_bound_is_scalar() {
        assert_eq!(
            parse_field_key("Course[999999][Institution]", 100),
            FieldKey::Scalar("Course[999999][Institution]")
        );
        assert!(matches!(parse_field_key("Course[100][Institution]", 100), FieldKey::Indexed { index: 100, .. }));
    }

    #[test]
    fn overflowing_index_is_scalar() {
        let raw = "Course[99999999999999999999999999][Institution]";
        assert_eq!(parse_field_key(raw, usize::MAX), FieldKey::Scalar(raw));
    }

    #[test]
    fn leading_zeros_parse_as_integer() {
        assert!(matches!(parse_field_key("Course[007][TotalHours]", 100), FieldKey::Indexed { index: 7, .. }));
    }

    #[test]
    fn bracket_detection_needs_both_brackets() {
        assert!(is_bracketed("a[b]"));
        assert!(is_bracketed("]a["));
        assert!(!is_bracketed("a[b"));
        assert!(!is_bracketed("plain"));
    }

    #[test]
    fn indexed_key_formats_back() {
        let key = indexed_key("Course", 1, "Institution");
        assert_eq!(key, "Course[1][Institution]");
        assert_eq!(parse_field_key(&key, 100).name(), "Course");
    }
}
