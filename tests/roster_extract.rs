// tests/roster_extract.rs
//
// Locator + row extraction over realistic fixture markup: the signup page
// wraps the roster in layout tables, serves Swedish header labels and
// appends signup dates to display names.
//
use bokat_scrape::specs::attendance::{extract, locate_roster_table};

fn page(rows: &str) -> String {
    format!(
        r#"<html>
<head><title>Innebandy söndagar</title></head>
<body>
<table class="PageTable"><tr><td>
  <table class="HeadTable"><tr><td>Vårens spelschema</td></tr></table>
  <table class="EventTable">
    <tr>
      <th>Status</th><th>Namn</th><th>Gäst</th><th>Kommentar</th>
    </tr>
{rows}
  </table>
</td></tr></table>
</body>
</html>"#
    )
}

const THREE_ROWS: &str = r#"
    <tr>
      <td><img src="/images/yes.png" alt="Kommer"></td>
      <td class="TextSmall">Jane Doe (2024-01-01)</td>
      <td class="TextSmall">&nbsp;</td>
      <td class="TextSmall">Tar med boll</td>
    </tr>
    <tr>
      <td><img src="/images/no.png" alt="Kommer inte"></td>
      <td class="TextSmall">John Smith</td>
      <td class="TextSmall">&nbsp;</td>
      <td class="TextSmall">&nbsp;</td>
    </tr>
    <tr>
      <td><img src="/images/maybe.png" alt="Kanske"></td>
      <td class="TextSmall">Erik Ek (2024-01-03)</td>
      <td class="TextSmall">1</td>
      <td class="TextSmall">Kommer sent</td>
    </tr>
"#;

#[test]
fn locator_finds_roster_among_layout_tables() {
    let doc = page(THREE_ROWS);
    let table = locate_roster_table(&doc).expect("roster table");
    assert!(table.starts_with(r#"<table class="EventTable">"#));
}

#[test]
fn locator_rejects_document_without_status_header() {
    let doc = r#"
        <table>
          <tr><th>Namn</th><th>Gäst</th><th>Kommentar</th></tr>
          <tr><td class="TextSmall">Jane Doe</td></tr>
        </table>
    "#;
    assert!(locate_roster_table(doc).is_none());
}

#[test]
fn extract_cleans_names_and_resolves_icons() {
    let doc = page(THREE_ROWS);
    let bundle = extract(&doc).expect("extract");

    assert_eq!(bundle.headers, vec!["Status", "Namn", "Gäst", "Kommentar"]);

    let names: Vec<&str> = bundle.signups.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Jane Doe", "John Smith", "Erik Ek"]);

    let icons: Vec<Option<&str>> = bundle
        .signups
        .iter()
        .map(|s| s.status_icon.as_deref())
        .collect();
    assert_eq!(icons, vec![Some("yes"), Some("no"), Some("maybe")]);

    let attending: Vec<bool> = bundle.signups.iter().map(|s| s.is_attending()).collect();
    assert_eq!(attending, vec![true, false, false]);
}

#[test]
fn rows_without_name_cell_or_icon_are_skipped_silently() {
    let rows = r#"
    <tr>
      <td colspan="4">Sektionsrubrik</td>
    </tr>
    <tr>
      <td></td>
      <td class="TextSmall">Utan Ikon</td>
      <td class="TextSmall">&nbsp;</td>
      <td class="TextSmall">&nbsp;</td>
    </tr>
    <tr>
      <td><img src="/images/yes.png"></td>
      <td class="TextSmall">Med Ikon</td>
      <td class="TextSmall">&nbsp;</td>
      <td class="TextSmall">&nbsp;</td>
    </tr>
"#;
    let bundle = extract(&page(rows)).expect("extract");

    // Header-less section row disappears; the icon-less row survives as a
    // non-attending signup.
    let got: Vec<(String, bool)> = bundle
        .signups
        .iter()
        .map(|s| (s.name.clone(), s.is_attending()))
        .collect();
    assert_eq!(
        got,
        vec![("Utan Ikon".to_string(), false), ("Med Ikon".to_string(), true)]
    );
}

#[test]
fn extract_errors_without_roster_table() {
    let doc = "<html><body><table><tr><td>inget här</td></tr></table></body></html>";
    let err = extract(doc).unwrap_err();
    assert!(err.to_string().contains("not found"));
}
