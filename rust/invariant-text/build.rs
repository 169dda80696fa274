use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Category data files, in precedence order. The first file that mentions
/// a code point owns it.
const CATEGORY_FILES: [(&str, &str); 10] = [
    ("non_glyph", "NonGlyph"),
    ("diacritic", "Diacritic"),
    ("ligature", "Ligature"),
    ("super_subscript", "SuperSubscript"),
    ("itemized", "Itemized"),
    ("adopted", "Adopted"),
    ("numeric", "Numeric"),
    ("spacing", "Spacing"),
    ("alignment", "Alignment"),
    ("punctuation", "Punctuation"),
];

fn parse_code_point(s: &str) -> u32 {
    let code = u32::from_str_radix(s, 16).unwrap();
    assert!(char::from_u32(code).is_some(), "invalid code point {s}");
    code
}

/// Reads `<code point> ; <replacement code points>` lines. An empty replacement
/// stands for a dropped code point.
fn read_category_data_file(name: &str) -> Vec<(u32, String)> {
    let file = File::open(format!("./data/categories/{name}.txt")).unwrap();
    let reader = BufReader::new(file);
    let mut entries = Vec::new();
    for l in reader.lines() {
        let l = l.unwrap();
        let l = l.split('#').next().unwrap().trim();
        if l.is_empty() {
            continue;
        }
        let (code, replacement) = l.split_once(';').unwrap();
        let code = parse_code_point(code.trim());
        let replacement = replacement
            .split_ascii_whitespace()
            .map(|s| char::from_u32(parse_code_point(s)).unwrap())
            .collect::<String>();
        assert!(replacement.chars().count() <= 4, "replacement too long for {code:05X}");
        entries.push((code, replacement));
    }
    entries
}

/// Reads `<code point> <mapped code point>` lines (decimal) into a dense vector
/// indexed by code point. Unmapped code points hold 0.
fn read_casemap_data_file(name: &str) -> Vec<u32> {
    let file = File::open(format!("./data/casemap/{name}")).unwrap();
    let reader = BufReader::new(file);
    let mut values = Vec::<u32>::new();
    for l in reader.lines() {
        let l = l.unwrap();
        let mut it = l.split_ascii_whitespace();
        let from = it.next().unwrap().parse::<u32>().unwrap();
        let to = it.next().unwrap().parse::<u32>().unwrap();
        assert!(it.next().is_none());
        assert!(char::from_u32(to).is_some(), "invalid mapping for {from}");
        assert!(values.len() <= from as usize, "{name} is not sorted at {from}");
        values.resize(from as usize, 0);
        values.push(to);
    }
    values
}

/// Generates a static vector that maps code points to their simple case
/// counterpart.
fn generate_case_mapping_vec(name: &str, buf: &mut String) {
    let values = read_casemap_data_file(name);
    buf.push_str(&format!(
        "pub(crate) const {}_MAP_LEN: usize = {};\r\n",
        name.to_uppercase(),
        values.len()
    ));
    buf.push_str(&format!(
        "pub(crate) static {}_MAP: [u32; {}] = [",
        name.to_uppercase(),
        values.len()
    ));
    for v in values {
        buf.push_str(&format!("{v},"));
    }
    buf.push_str("];\r\n");
}

/// Generates the static table that maps code points to their category and
/// replacement, sorted by code point.
fn generate_folding_table(buf: &mut String) {
    let mut table = BTreeMap::<u32, (&str, String)>::new();
    for (file, category) in CATEGORY_FILES {
        for (code, replacement) in read_category_data_file(file) {
            if let Some((owner, _)) = table.get(&code) {
                println!("cargo:warning=U+{code:05X} from {file} is shadowed by {owner}");
                continue;
            }
            table.insert(code, (category, replacement));
        }
    }

    buf.push_str(&format!(
        "pub(crate) const FOLDING_TABLE_LEN: usize = {};\r\n",
        table.len()
    ));
    buf.push_str(&format!(
        "pub(crate) static FOLDING_TABLE: [FoldingEntry; {}] = [\r\n",
        table.len()
    ));
    for (code, (category, replacement)) in table {
        buf.push_str(&format!(
            "FoldingEntry {{ code: 0x{code:05X}, category: Category::{category}, replacement: {replacement:?} }},\r\n"
        ));
    }
    buf.push_str("];\r\n");
}

fn main() {
    println!("cargo:rerun-if-changed=data/categories");
    for (file, _) in CATEGORY_FILES {
        println!("cargo:rerun-if-changed=data/categories/{file}.txt");
    }
    println!("cargo:rerun-if-changed=data/casemap");
    for name in ["tolower", "toupper"] {
        println!("cargo:rerun-if-changed=data/casemap/{name}");
    }

    let out_dir = std::env::var("OUT_DIR").unwrap();

    let mut buf = String::new();
    generate_folding_table(&mut buf);
    std::fs::write(Path::new(&out_dir).join("folding_table.rs"), buf).unwrap();

    let mut buf = String::from("mod case_mapping {\r\n");
    generate_case_mapping_vec("tolower", &mut buf);
    generate_case_mapping_vec("toupper", &mut buf);
    buf.push('}');
    std::fs::write(Path::new(&out_dir).join("case_mapping.rs"), buf).unwrap();
}
