use std::{
    collections::HashMap,
    fs,
    path::Path,
    sync::OnceLock,
};

use log::info;
use regex::{
    Captures,
    Regex,
};

use crate::core::BmaError;

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([^{}]*)\}").expect("placeholder pattern is valid"))
}

/// Replace every `{VAR}` in `text` with `variables[VAR]`.
///
/// Placeholders without an entry are left as they are. This is a single pass over
/// the input, so replacement values are emitted literally even when they contain
/// `{...}` themselves. Keys containing braces never match.
pub fn patch_variables_in_text(text: &str, variables: &HashMap<String, String>) -> String {
    if variables.is_empty() {
        return text.to_string();
    }

    placeholder_regex()
        .replace_all(text, |captures: &Captures| match variables.get(&captures[1]) {
            Some(value) => value.clone(),
            None => captures[0].to_string(),
        })
        .into_owned()
}

/// Read `file_path`, patch its placeholders and optionally write the result to
/// `output_path` (created or overwritten). Returns the patched content.
pub fn patch_variables_in_file(
    file_path: &Path,
    variables: &HashMap<String, String>,
    output_path: Option<&Path>,
) -> Result<String, BmaError> {
    let content = fs::read_to_string(file_path)?;
    let patched_content = patch_variables_in_text(&content, variables);

    if let Some(output_path) = output_path {
        fs::write(output_path, &patched_content)?;
        info!("Patched content saved to '{}'", output_path.display());
    }

    Ok(patched_content)
}

/// Shorthand for building a placeholder map from string pairs.
pub fn variables<const N: usize>(pairs: [(&str, &str); N]) -> HashMap<String, String> {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_tag_substitution() {
        let vars = variables([("TAG", "v1.0")]);
        assert_eq!(patch_variables_in_text("build-{TAG}.js", &vars), "build-v1.0.js");
        assert_eq!(
            patch_variables_in_text("{TAG}/{TAG}", &vars),
            "v1.0/v1.0",
            "every occurrence is replaced"
        );
    }

    #[test]
    fn test_unknown_placeholders_untouched() {
        let vars = variables([("TAG", "v1.0")]);
        assert_eq!(patch_variables_in_text("{OTHER} {TAG}", &vars), "{OTHER} v1.0");
        assert_eq!(patch_variables_in_text("no placeholders", &vars), "no placeholders");

        // Anki field references and CSS blocks survive
        let html = "<div>{{Front}}</div><style>.card { color: red; }</style>";
        assert_eq!(patch_variables_in_text(html, &vars), html);
    }

    #[test]
    fn test_no_recursive_expansion() {
        let vars = variables([("A", "{B}"), ("B", "b")]);
        assert_eq!(patch_variables_in_text("{A}-{B}", &vars), "{B}-b");

        let vars = variables([("B", "{A}"), ("A", "a")]);
        assert_eq!(patch_variables_in_text("{A}-{B}", &vars), "a-{A}");
    }

    #[test]
    fn test_idempotent_once_exhausted() {
        let vars = variables([("TAG", "v1.0"), ("type", "Basic")]);
        let text = "Better Markdown Anki ({type}) {TAG} {missing}";
        let once = patch_variables_in_text(text, &vars);
        assert_eq!(patch_variables_in_text(&once, &HashMap::new()), once);
        assert_eq!(once, "Better Markdown Anki (Basic) v1.0 {missing}");
    }

    #[test]
    fn test_patch_file_with_output() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("script.html");
        let output = temp.path().join("out").join("script.html");
        fs::create_dir_all(output.parent().unwrap()).unwrap();
        fs::write(&source, "<script src=\"_bma-{TAG}.js\"></script>").unwrap();
        fs::write(&output, "stale content that should be replaced").unwrap();

        let patched =
            patch_variables_in_file(&source, &variables([("TAG", "v2")]), Some(&output)).unwrap();

        assert_eq!(patched, "<script src=\"_bma-v2.js\"></script>");
        assert_eq!(fs::read_to_string(&output).unwrap(), patched);
        // Source is left alone
        assert!(fs::read_to_string(&source).unwrap().contains("{TAG}"));
    }

    #[test]
    fn test_patch_file_without_output() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("style.css");
        fs::write(&source, ".card { font-family: bma-{TAG}; }").unwrap();

        let patched = patch_variables_in_file(&source, &variables([("TAG", "x")]), None).unwrap();
        assert_eq!(patched, ".card { font-family: bma-x; }");
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_patch_file_errors() {
        let temp = TempDir::new().unwrap();

        let missing = patch_variables_in_file(&temp.path().join("nope.html"), &HashMap::new(), None);
        assert!(matches!(missing, Err(BmaError::Io(_))));

        let binary = temp.path().join("binary.html");
        fs::write(&binary, [0xff, 0xfe, 0x00, 0x81]).unwrap();
        let not_utf8 = patch_variables_in_file(&binary, &HashMap::new(), None);
        assert!(matches!(not_utf8, Err(BmaError::Io(_))));
    }

    proptest! {
        #[test]
        fn prop_substitutes_known_keys_only(
            segments in proptest::collection::vec(("[a-z <>/.-]{0,6}", 0usize..4), 0..10)
        ) {
            let keys = ["TAG", "type", "name", "unset"];
            let vars = variables([("TAG", "v1.0"), ("type", "Cloze"), ("name", "{TAG}")]);

            let mut text = String::new();
            let mut expected = String::new();
            for (literal, key_idx) in &segments {
                let key = keys[*key_idx];
                text.push_str(literal);
                text.push_str(&format!("{{{}}}", key));
                expected.push_str(literal);
                match vars.get(key) {
                    Some(value) => expected.push_str(value),
                    None => expected.push_str(&format!("{{{}}}", key)),
                }
            }

            let patched = patch_variables_in_text(&text, &vars);
            prop_assert_eq!(&patched, &expected);
            prop_assert_eq!(patch_variables_in_text(&patched, &HashMap::new()), patched);
        }
    }
}
