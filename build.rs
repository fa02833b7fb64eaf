//! Build script for generating the size probes from the structure type list

use std::{env, fs, path::Path};

const TYPE_LIST: &str = "sizes/typelist.txt";

// Headers the C probe needs to see every listed structure, one group each
const GPHOTO2_HEADERS: &[&[&str]] = &[
    &["gphoto2/gphoto2-port.h"],
    &[
        "gphoto2/gphoto2-camera.h",
        "gphoto2/gphoto2-file.h",
        "gphoto2/gphoto2-filesys.h",
        "gphoto2/gphoto2-abilities-list.h",
    ],
];

fn main() {
    println!("cargo:rerun-if-changed={}", TYPE_LIST);
    println!("cargo:rerun-if-changed=build.rs");

    let raw = fs::read_to_string(TYPE_LIST).expect("Failed to read structure type list");
    let types = parse_type_list(&raw);
    if types.is_empty() {
        panic!("{} lists no structure types", TYPE_LIST);
    }

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set by cargo");
    let c_path = Path::new(&out_dir).join("testsizes.c");
    let rust_path = Path::new(&out_dir).join("size_table.rs");

    fs::write(&c_path, generate_c_source(&types)).expect("Failed to write generated C probe");
    fs::write(&rust_path, generate_rust_table(&types)).expect("Failed to write generated size table");
}

/// Type names in file order. `#` starts a comment line.
fn parse_type_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|name| {
            let valid = name.chars().next().map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
                && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            if !valid {
                panic!("{:?} in {} is not a C identifier", name, TYPE_LIST);
            }
            name.to_string()
        })
        .collect()
}

/// Generate the C probe, printing `<name> <sizeof>` for each type
fn generate_c_source(types: &[String]) -> String {
    let mut src = String::new();
    src.push_str("/* size check output for language c */\n");
    src.push_str("/* DO NOT MODIFY THIS FILE - MODIFY build.rs and sizes/typelist.txt instead */\n\n");
    src.push_str("#include <stdio.h>\n\n");
    for group in GPHOTO2_HEADERS {
        for header in group.iter() {
            src.push_str(&format!("#include <{}>\n", header));
        }
        src.push('\n');
    }
    src.push_str("int\nmain(void)\n{\n");
    for name in types {
        src.push_str(&format!(
            "  printf(\"%s %zu\\n\", \"{name}\", sizeof({name}));\n",
            name = name
        ));
    }
    src.push_str("  return 0;\n}\n");
    src
}

/// Generate the Rust side of the probe: one `size_of` per mirrored type
fn generate_rust_table(types: &[String]) -> String {
    let mut names = String::new();
    let mut sizes = String::new();
    for name in types {
        names.push_str(&format!("    \"{}\",\n", name));
        sizes.push_str(&format!(
            "    (\"{name}\", ::core::mem::size_of::<crate::ffi::types::{name}>()),\n",
            name = name
        ));
    }

    format!(
        r#"// AUTO-GENERATED - DO NOT EDIT
// Generated from sizes/typelist.txt by build.rs

/// Probed structure names, in output order
pub const TYPE_NAMES: &[&str] = &[
{names}];

/// `(name, size_of)` for each mirrored structure, in output order
pub(crate) const RUST_SIZES: &[(&str, usize)] = &[
{sizes}];
"#,
        names = names,
        sizes = sizes,
    )
}
