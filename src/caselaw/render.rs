use super::judgment::CaseRecord;

pub const COURT_LOCATION: &str = "United Kingdom";
pub const SOURCE_NAME: &str = "UK CASE LAW NATIONAL ARCHIVES";

// Field values are already-escaped fragments.
pub fn render_case_html(record: &CaseRecord) -> String {
    let court = format!("{}<p>{COURT_LOCATION}</p>", record.court);
    let source = format!("<p>{SOURCE_NAME}</p>");

    let metadata = [
        ("title", record.title.as_str()),
        ("date", record.date.as_str()),
        ("caseId", record.case_id.as_str()),
        ("refId", ""),
        ("court", court.as_str()),
        ("judges", record.judges.as_str()),
        ("presiding-judge", record.presiding_judge.as_str()),
        ("parties", record.parties.as_str()),
        ("counsel", ""),
        ("media-nuetral-citation", record.neutral_citation.as_str()),
        ("law-report-citation", ""),
        ("indices", ""),
        ("source", source.as_str()),
        ("nature-of-proceedings", ""),
        ("headnotes", record.headnotes.as_str()),
        ("editorial-notes", ""),
        ("books-referred-to", ""),
        ("cases-referred-to", ""),
        ("statutes-referred-to", ""),
        ("footnotes", ""),
    ];

    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n</head>\n<body>\n<section id=\"metadata\">\n",
    );
    for (id, value) in metadata {
        html.push_str(&format!("<div id=\"{id}\">{value}</div>\n"));
    }
    html.push_str("</section>\n<div id=\"documentType\"></div>\n<section id=\"content\">\n");
    html.push_str(&record.content);
    html.push_str("\n</section>\n</body>\n</html>\n");
    html
}
