//! Rust source generation for ID constants.

use std::collections::HashMap;
use std::fmt::Write;

use crate::config::IdsConfig;
use crate::GenerateError;

/// Constant name for a namespace or mosaic name.
///
/// `nem.xem` → `NEM_XEM`, `nem:xem` → `NEM_XEM`, `my-coin` → `MY_COIN`.
/// Names that would not start with a letter or would be a lone `_` get an
/// `ID_` prefix.
pub fn const_name(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| match c {
            '.' | ':' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect();

    if ident.starts_with(|c: char| c.is_ascii_digit()) || ident.chars().all(|c| c == '_') {
        ident.insert_str(0, "ID_");
    }
    ident
}

/// Generate a module of `pub const NAME: i64` items for every entry of `config`.
///
/// ```text
/// pub mod ids {
///     pub mod namespaces { pub const NEM: i64 = -8884663987180930485; }
///     pub mod mosaics { pub const NEM_XEM: i64 = -3087871471161192663; }
/// }
/// ```
pub fn generate_ids_code(config: &IdsConfig) -> Result<String, GenerateError> {
    let namespaces = config
        .namespaces()
        .map(|e| (e.name.as_str(), e.id))
        .collect::<Vec<_>>();
    let mosaics = config
        .mosaics()
        .map(|e| (e.full_name.as_str(), e.id))
        .collect::<Vec<_>>();

    let mut out = String::new();
    writeln!(out, "// @generated by nem-id-build. Do not edit.")?;
    writeln!(out)?;
    writeln!(out, "#[allow(dead_code)]")?;
    writeln!(out, "pub mod {} {{", config.module_name)?;
    write_section(&mut out, "namespaces", &namespaces)?;
    write_section(&mut out, "mosaics", &mosaics)?;
    writeln!(out, "}}")?;
    Ok(out)
}

fn write_section(
    out: &mut String,
    module: &str,
    entries: &[(&str, i64)],
) -> Result<(), GenerateError> {
    let mut taken: HashMap<String, &str> = HashMap::new();

    writeln!(out, "    pub mod {} {{", module)?;
    for &(name, id) in entries {
        let ident = const_name(name);
        if let Some(existing) = taken.insert(ident.clone(), name) {
            return Err(GenerateError::DuplicateConstant {
                ident,
                first: existing.to_string(),
                second: name.to_string(),
            });
        }

        tracing::debug!(name, id, ident = %ident, "generated {} constant", module);
        writeln!(out, "        /// `{}`", name)?;
        writeln!(out, "        pub const {}: i64 = {};", ident, id)?;
    }
    writeln!(out, "    }}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn const_names() {
        assert_eq!(const_name("nem"), "NEM");
        assert_eq!(const_name("nem.xem"), "NEM_XEM");
        assert_eq!(const_name("nem:xem"), "NEM_XEM");
        assert_eq!(const_name("my-coin_2"), "MY_COIN_2");
        assert_eq!(const_name("_private"), "_PRIVATE");
        assert_eq!(const_name("9lives"), "ID_9LIVES");
        assert_eq!(const_name("-"), "ID__");
    }

    #[test]
    fn generates_nested_modules() {
        let config = IdsConfig::from_str(
            r#"
module_name = "chain"

[namespaces]
names = ["nem"]

[mosaics]
names = ["nem:xem"]
"#,
        )
        .unwrap();
        let code = generate_ids_code(&config).unwrap();

        assert!(code.starts_with("// @generated"));
        assert!(code.contains("pub mod chain {"));
        assert!(code.contains("pub mod namespaces {"));
        assert!(code.contains("pub mod mosaics {"));
        assert!(code.contains("/// `nem`"));
        assert!(code.contains("pub const NEM: i64 = -8884663987180930485;"));
        assert!(code.contains("/// `nem:xem`"));
        assert!(code.contains("pub const NEM_XEM: i64 = -3087871471161192663;"));
    }

    #[test]
    fn rejects_colliding_constant_names() {
        let config = IdsConfig::from_str(
            r#"
[namespaces]
names = ["my-coin", "my_coin"]
"#,
        )
        .unwrap();
        let err = generate_ids_code(&config).unwrap_err();

        match err {
            GenerateError::DuplicateConstant { ident, first, second } => {
                assert_eq!(ident, "MY_COIN");
                assert_eq!(first, "my-coin");
                assert_eq!(second, "my_coin");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn namespace_and_mosaic_may_share_a_constant_name() {
        // `nem.xem` and `nem:xem` live in different modules.
        let config = IdsConfig::from_str(
            r#"
[namespaces]
names = ["nem.xem"]

[mosaics]
names = ["nem:xem"]
"#,
        )
        .unwrap();
        let code = generate_ids_code(&config).unwrap();
        assert_eq!(code.matches("pub const NEM_XEM: i64").count(), 2);
    }
}
