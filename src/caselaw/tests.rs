use super::*;

fn parser() -> CaseLawParser {
    CaseLawParser::new().expect("case-law parser should build")
}

const JUDGMENT_FIXTURE: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<akomaNtoso xmlns="http://docs.oasis-open.org/legaldocml/ns/akn/3.0" xmlns:uk="https://caselaw.nationalarchives.gov.uk/akn">
  <judgment name="judgment">
    <meta>
      <identification source="#tna">
        <FRBRWork>
          <FRBRdate date="2023-03-14" name="judgment"/>
          <FRBRname value="Smith v Jones &amp; Co"/>
        </FRBRWork>
      </identification>
      <references source="#tna">
        <TLCOrganization eId="ewhc" href="https://www.judiciary.uk" showAs="High Court" shortForm="EWHC"/>
      </references>
    </meta>
    <header>
      <p>Neutral Citation Number: <neutralCitation>[2023] EWHC 1 (KB)</neutralCitation></p>
      <p>Case No: KB-2022-000123</p>
      <p>Before:</p>
      <p>THE HONOURABLE MR JUSTICE RIPLEY</p>
      <p>Between:</p>
      <p>- - -</p>
    </header>
    <judgmentBody>
      <decision>
        <paragraph eId="para_1"><num>1.</num><content><p>The claim   is
          dismissed.</p></content></paragraph>
        <level>
          <heading>Background</heading>
          <paragraph eId="para_2"><num>2.</num><content><p>Facts &lt;here&gt;.</p></content></paragraph>
        </level>
      </decision>
    </judgmentBody>
  </judgment>
</akomaNtoso>"##;

#[test]
fn judgment_fields_come_from_frbr_metadata_and_header() {
    let record = parser().parse_xml(JUDGMENT_FIXTURE).expect("fixture parses");

    assert_eq!(record.title, "<p>Smith v Jones &amp; Co</p>");
    assert_eq!(record.date, "<p>2023-03-14</p>");
    assert_eq!(record.case_id, "KB-2022-000123");
    assert_eq!(record.court, "<p>EWHC</p>");
    assert_eq!(record.neutral_citation, "<p>[2023] EWHC 1 (KB)</p>");
}

#[test]
fn judges_fall_back_to_names_after_before_line() {
    let record = parser().parse_xml(JUDGMENT_FIXTURE).expect("fixture parses");

    assert_eq!(record.judges, "<p>THE HONOURABLE MR JUSTICE RIPLEY</p>");
    assert_eq!(record.presiding_judge, "<p>THE HONOURABLE MR JUSTICE RIPLEY</p>");
}

#[test]
fn parties_fall_back_to_title_split_on_versus() {
    let record = parser().parse_xml(JUDGMENT_FIXTURE).expect("fixture parses");
    assert_eq!(record.parties, "<p>Smith</p><p>v</p><p>Jones &amp; Co</p>");
}

#[test]
fn headnotes_keep_header_paragraphs_with_letters() {
    let record = parser().parse_xml(JUDGMENT_FIXTURE).expect("fixture parses");

    assert!(record.headnotes.starts_with("<p>Neutral Citation Number: [2023] EWHC 1 (KB)</p> "));
    assert!(record.headnotes.contains("<p>Before:</p> <p>THE HONOURABLE MR JUSTICE RIPLEY</p>"));
    assert!(!record.headnotes.contains("- - -"));
}

#[test]
fn decision_paragraphs_and_levels_become_content() {
    let record = parser().parse_xml(JUDGMENT_FIXTURE).expect("fixture parses");

    assert_eq!(
        record.content,
        concat!(
            "<p id=\"1\">The claim is dismissed.</p>",
            "<div><p>Background</p><p id=\"2\">Facts &lt;here&gt;.</p></div>",
        )
    );
    assert_eq!(record.paragraph_count, 2);
}

#[test]
fn explicit_judges_and_party_roles_take_precedence() {
    let xml = r##"<akomaNtoso xmlns="http://docs.oasis-open.org/legaldocml/ns/akn/3.0">
      <judgment>
        <header>
          <p>Before: <judge refersTo="#carr">Lady Justice Carr</judge></p>
          <p><judge refersTo="#green">Lord Justice Green</judge></p>
          <p><party>Alpha Ltd</party> <role>Appellant</role></p>
          <p><party>Beta plc</party> <role>Respondent</role></p>
          <p>Headnote line one<br/>line two</p>
        </header>
      </judgment>
    </akomaNtoso>"##;

    let record = parser().parse_xml(xml).expect("xml parses");

    assert_eq!(record.judges, "<p>Lady Justice Carr</p><p>Lord Justice Green</p>");
    assert_eq!(record.presiding_judge, "<p>Lady Justice Carr</p>");
    assert_eq!(
        record.parties,
        "<p>Alpha Ltd</p><p>Appellant</p><p>Beta plc</p><p>Respondent</p>"
    );
    assert!(record.headnotes.ends_with("<p>Headnote line one</p> <p>line two</p>"));
    assert_eq!(record.title, "<p></p>");
    assert_eq!(record.date, "");
    assert_eq!(record.content, "");
}

#[test]
fn elements_outside_akoma_ntoso_namespace_are_ignored() {
    let xml = r#"<akomaNtoso><meta><FRBRname value="Unqualified"/></meta></akomaNtoso>"#;
    let record = parser().parse_xml(xml).expect("xml parses");

    assert_eq!(record.title, "<p></p>");
    assert_eq!(record.parties, "<p></p>");
}

#[test]
fn case_number_markup_characters_are_escaped() {
    let xml = r#"<akomaNtoso xmlns="http://docs.oasis-open.org/legaldocml/ns/akn/3.0">
      <judgment><header><p>Case No: A1 &amp; B2 &lt;x&gt;</p></header></judgment>
    </akomaNtoso>"#;
    let record = parser().parse_xml(xml).expect("xml parses");

    assert_eq!(record.case_id, "A1 &amp; B2 &lt;x&gt;");
    assert!(render_case_html(&record).contains("<div id=\"caseId\">A1 &amp; B2 &lt;x&gt;</div>"));
}

#[test]
fn malformed_xml_is_an_error() {
    let err = parser()
        .parse_xml("<akomaNtoso><judgment>")
        .expect_err("unterminated document must fail");
    assert!(err.to_string().contains("failed to parse judgment XML"));
}

#[test]
fn rendered_page_lists_metadata_divs_in_layout_order() {
    let record = parser().parse_xml(JUDGMENT_FIXTURE).expect("fixture parses");
    let html = render_case_html(&record);

    assert!(html.contains("<div id=\"court\"><p>EWHC</p><p>United Kingdom</p></div>"));
    assert!(html.contains("<div id=\"source\"><p>UK CASE LAW NATIONAL ARCHIVES</p></div>"));
    assert!(html.contains("<div id=\"refId\"></div>"));
    assert!(html.contains("<div id=\"documentType\"></div>"));
    assert!(html.contains("<section id=\"metadata\">"));
    assert!(!html.contains("class="));
    assert!(html.contains("<p id=\"1\">The claim is dismissed.</p>"));

    let order = [
        "id=\"title\"",
        "id=\"date\"",
        "id=\"caseId\"",
        "id=\"court\"",
        "id=\"judges\"",
        "id=\"presiding-judge\"",
        "id=\"parties\"",
        "id=\"media-nuetral-citation\"",
        "id=\"headnotes\"",
        "id=\"footnotes\"",
        "id=\"content\"",
    ];
    let positions = order
        .iter()
        .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {marker}")))
        .collect::<Vec<usize>>();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}
