use pretty_assertions::assert_eq;
use serde_json::json;
use wikitables_core::{import_tables, Catalog, ReadContext, ReaderOptions, Table, Value};

fn load(source: &str) -> Table {
    load_with(source, &ReadContext::default())
}

fn load_with(source: &str, ctx: &ReadContext) -> Table {
    import_tables("Test Table", source, ctx)
        .unwrap()
        .into_iter()
        .next()
        .unwrap()
}

fn keys(table: &Table, row: usize) -> Vec<&str> {
    table.rows()[row].keys().collect()
}

#[test]
fn simple_table() {
    let table = load(
        r#"
{| class="wikitable"
|-
! Column 1 header !! Column 2 header
|-
| Row 1 Column 1 || Row 1 Column 2
|-
| Row 2 Column 1 || Row 2 Column 1
|}

"#,
    );

    assert_eq!(table.name(), "Test Table[0]");
    assert_eq!(table.head(), ["Column 1 header", "Column 2 header"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(keys(&table, 0), vec!["Column 1 header", "Column 2 header"]);
    assert_eq!(table.rows()[0]["Column 2 header"].value, Value::from("Row 1 Column 2"));
    assert_eq!(table.rows()[1].name, "Test Table[0][1]");
}

const COMPLEX: &str = r#"
{| class="wikitable sortable"
! 2018<br>rank
! [[Municipalities of Brazil|City]]
! [[States of Brazil|State]]
! 2018<br>Estimate
! 2010<br>Census
! Change
|-
! 1
|'''''[[São Paulo]]'''''
| {{flag|São Paulo}}
| {{change|invert=on|12176866|10659386}}
|-
! 2
| '''''[[Rio de Janeiro]]'''''
| {{flag|Rio de Janeiro}}
| {{change|invert=on|6688927|5940224}}
|}
"#;

#[test]
fn complex_table() {
    let table = load(COMPLEX);

    assert_eq!(table.row_count(), 2);
    assert_eq!(
        keys(&table, 0),
        vec!["2018rank", "City", "State", "2018Estimate", "2010Census", "Change"]
    );

    let row = &table.rows()[0];
    assert_eq!(row["2018rank"].value, Value::Integer(1));
    assert_eq!(row["City"].value, Value::from("São Paulo"));
    assert_eq!(row["State"].value, Value::from("São Paulo"));
    assert_eq!(row["2018Estimate"].value, Value::Integer(12176866));
    assert_eq!(row["2010Census"].value, Value::Integer(10659386));
    let change = row["Change"].value.as_f64().unwrap();
    assert!((change - 14.236).abs() < 0.001);

    assert_eq!(table.rows()[1]["City"].value, Value::from("Rio de Janeiro"));
}

#[test]
fn change_template_error_fails_table() {
    let source = "{|\n! A !! B !! C\n|-\n| {{change|many|10}}\n|}";
    let err = import_tables("Test Table", source, &ReadContext::default()).unwrap_err();
    assert!(err.to_string().contains("change"));
}

const FLAGS: &str = r#"
{| class="wikitable"
! Year
! Name
! Nationality
! Citation
|-
| 1978
| [[Carl Djerassi]]
| {{AUT}} / {{USA}}
|  for his work in bioorganic chemistry, application of new spectroscopic techniques, and his support of international cooperation.
|-
| 1980
| [[Henry Eyring (chemist)|Henry Eyring]]
| {{MEX}} / {{USA}}
|  for his development of absolute rate theory and its imaginative applications to chemical and physical processes.
|}
"#;

#[test]
fn flag_template() {
    let table = load(FLAGS);

    assert_eq!(table.row_count(), 2);
    assert_eq!(keys(&table, 0), vec!["Year", "Name", "Nationality", "Citation"]);
    assert_eq!(table.rows()[0]["Year"].value, Value::Integer(1978));
    assert_eq!(table.rows()[0]["Name"].value, Value::from("Carl Djerassi"));
    assert_eq!(
        table.rows()[0]["Nationality"].value,
        Value::from("Austria / United States")
    );
    assert_eq!(table.rows()[1]["Name"].value, Value::from("Henry Eyring"));
    assert_eq!(
        table.rows()[1]["Nationality"].value,
        Value::from("Mexico / United States")
    );
}

#[test]
fn flag_template_localized() {
    let catalog = Catalog::from_names(
        "de",
        [
            ("Austria", "Österreich"),
            ("United States", "Vereinigte Staaten"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect(),
    );
    let ctx = ReadContext::new("de").with_catalog(catalog);
    let table = load_with(FLAGS, &ctx);

    assert_eq!(table.lang(), "de");
    assert_eq!(
        table.rows()[0]["Nationality"].value,
        Value::from("Österreich / Vereinigte Staaten")
    );
    assert_eq!(
        table.rows()[1]["Nationality"].value,
        Value::from("Mexico / Vereinigte Staaten")
    );
}

#[test]
fn empty_fields() {
    let source = r#"
{| class="wikitable sortable" border="1" style="font-size:85%;"
! Archi-<br>tecture
! Bits
! Version
! Intro-<br>duced
! Max #<br>[[operand]]s
! Type
! Design <!-- Design Strategy/Philosophy -->
! [[Processor register|Registers]]<br>(excluding FP/vector)
! Instruction encoding
! [[Branch (computer science)|Branch]] evaluation
! [[Endianness|Endian-<br>ness]]
! Extensions
! Open
! Royalty<br>free
|-
| [[MOS Technology 6502|6502]]
| 8
|
| 1975
| 1
| Register Memory
| CISC
| 3
| Variable <small>(8- to 32-bit)</small>
| Condition register
| Little
|
|
|
|-
| 68000 / [[Motorola 68000 series|680x0]]
| 32
|
| 1979
| 2
| Register Memory
| [[Complex instruction set computer|CISC]]
| 8 data and 8 address
| Variable
| Condition register
| Big
|
|
|
|}
"#;

    let expected = json!([
        {
            "Archi-tecture": 6502,
            "Bits": 8,
            "Branch evaluation": "Condition register",
            "Design": "CISC",
            "Endian-ness": "Little",
            "Extensions": "",
            "Instruction encoding": "Variable (8- to 32-bit)",
            "Intro-duced": 1975,
            "Max #operands": 1,
            "Open": "",
            "Registers(excluding FP/vector)": 3,
            "Royaltyfree": "",
            "Type": "Register Memory",
            "Version": ""
        },
        {
            "Archi-tecture": "68000 / 680x0",
            "Bits": 32,
            "Branch evaluation": "Condition register",
            "Design": "CISC",
            "Endian-ness": "Big",
            "Extensions": "",
            "Instruction encoding": "Variable",
            "Intro-duced": 1979,
            "Max #operands": 2,
            "Open": "",
            "Registers(excluding FP/vector)": "8 data and 8 address",
            "Royaltyfree": "",
            "Type": "Register Memory",
            "Version": ""
        }
    ]);

    let table = load(source);
    assert_eq!(table.column_count(), 14);

    let actual: serde_json::Value = serde_json::from_str(&table.to_json().unwrap()).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn row_span_carries_down() {
    let table = load(
        r#"
{| class="wikitable"
! Country !! City
|-
| rowspan="2" | France || Paris
|-
| Lyon
|-
| Spain || Madrid
|}
"#,
    );

    let actual: serde_json::Value = serde_json::from_str(&table.to_json().unwrap()).unwrap();
    assert_eq!(
        actual,
        json!([
            { "Country": "France", "City": "Paris" },
            { "Country": "France", "City": "Lyon" },
            { "Country": "Spain", "City": "Madrid" }
        ])
    );
}

#[test]
fn flat_header_takes_precedence() {
    let table = load("{|\n! A !! B\n|-\n! w !! x !! y\n|-\n| 1 || 2\n|}");

    assert_eq!(table.head(), ["A", "B"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[0]["B"].value, Value::from("x"));
}

#[test]
fn footnotes_are_left_out() {
    let table = load(
        "{|\n! Name !! Score\n|-\n| Ada{{refn|group=Note|retired}} || 12<ref group=\"Note\">estimate</ref>\n|}",
    );

    assert_eq!(table.rows()[0]["Name"].value, Value::from("Ada"));
    assert_eq!(table.rows()[0]["Score"].value, Value::Integer(12));
}

#[test]
fn shorter_head_drops_columns() {
    let mut table = load(COMPLEX);

    table
        .set_head(vec!["Rank".to_string(), "City".to_string()])
        .unwrap();

    assert_eq!(table.row_count(), 2);
    assert_eq!(keys(&table, 0), vec!["Rank", "City"]);
    assert_eq!(table.rows()[1]["Rank"].value, Value::Integer(2));

    assert!(table.set_head_json(&json!({ "Rank": 0 })).is_err());
    assert_eq!(table.head(), ["Rank", "City"]);
}

#[test]
fn tables_found_in_document_order() {
    let source = "== One ==\n{|\n! A\n|-\n| 1\n|}\n\n== Two ==\n{| class=\"wikitable\"\n! B\n|-\n| 2\n|}\n";
    let tables = import_tables("Page", source, &ReadContext::default()).unwrap();

    let names: Vec<_> = tables.iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["Page[0]", "Page[1]"]);
    assert_eq!(tables[1].to_json().unwrap(), r#"[{"B":2}]"#);
}

#[test]
fn duplicate_header_names_later_value_wins() {
    let table = load("{|\n! A !! A !! B\n|-\n| 1 || 2 || 3\n|}");

    assert_eq!(table.head(), ["A", "A", "B"]);
    assert_eq!(keys(&table, 0), vec!["A", "B"]);
    assert_eq!(table.rows()[0]["A"].value, Value::Integer(2));
    assert_eq!(table.rows()[0]["B"].value, Value::Integer(3));
}

#[test]
fn pipes_inside_tags_stay_in_cell() {
    let table = load("{|\n|-\n! A !! B\n|-\n| 42<ref>p. 3|4</ref> || x<nowiki>|</nowiki>y\n|}");

    assert_eq!(table.rows()[0]["A"].value, Value::from("42 p. 3|4"));
    assert_eq!(table.rows()[0]["B"].value, Value::from("x | y"));
}

#[test]
fn media_links_follow_options() {
    let source = "{|\n! Team\n|-\n| [[File:Flag of Brazil.svg|22px]] Brazil\n|}";

    let table = load(source);
    assert_eq!(table.rows()[0]["Team"].value, Value::from("22px Brazil"));

    let ctx = ReadContext::default().with_options(ReaderOptions {
        hide_media_links: true,
        ..ReaderOptions::default()
    });
    let table = load_with(source, &ctx);
    assert_eq!(table.rows()[0]["Team"].value, Value::from("Brazil"));
}
