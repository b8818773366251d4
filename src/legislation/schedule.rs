use super::markers::{is_image_marker, is_schedule_marker};
use super::node::MarkupNode;
use super::table::extract_table;
use super::text::normalize_inline;
use crate::model::{Image, Schedule};

pub fn extract_schedule<N: MarkupNode>(container: &N) -> Schedule {
    let mut schedule = Schedule::default();
    let mut title = String::new();
    let mut started = false;

    for child in container.children() {
        if !child.is_element() {
            continue;
        }

        if let Some(image) = child.find(|node| is_image_marker(node)) {
            schedule.images.push(Image {
                alt_text: title.clone(),
                link: image.attribute("src").unwrap_or_default().to_string(),
                name: format!("image_{}", schedule.images.len() + 1),
            });
        }

        if let Some(table) = extract_table(&child) {
            schedule.tables.push(table);
        }

        let text = child.text();
        if is_schedule_marker(&child) {
            if !started && !text.is_empty() {
                title = text.trim().to_string();
            }
            started = true;
        }

        if started && !text.trim().is_empty() {
            schedule.content.push_str(&normalize_inline(&text));
            schedule.content.push('\n');
        }
    }

    schedule
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;
    use crate::legislation::markers::is_container_marker;
    use crate::legislation::node::HtmlNode;

    fn schedule_for(html: &str) -> Schedule {
        let document = Html::parse_document(html);
        let container = HtmlNode::document_root(&document)
            .find(|node| is_container_marker(node))
            .expect("fixture has a DocContainer");
        extract_schedule(&container)
    }

    #[test]
    fn tables_before_onset_are_kept_without_content() {
        let schedule = schedule_for(
            r#"<div class="DocContainer">
              <h2>Section 1</h2>
              <div class="LegTabular" id="t1"><table><tbody><tr><td>a</td></tr></tbody></table></div>
              <p>Section body</p>
            </div>"#,
        );

        assert_eq!(schedule.tables.len(), 1);
        assert_eq!(schedule.tables[0].name.as_deref(), Some("t1"));
        assert!(schedule.content.is_empty());
        assert!(schedule.images.is_empty());
    }

    #[test]
    fn content_accumulates_from_first_schedule_marker_to_end() {
        let schedule = schedule_for(
            r#"<div class="DocContainer">
              <p>Section body</p>
              <h2 class="LegScheduleFirst">SCHEDULE 1
                 Repeals</h2>
              <p>   </p>
              <p>First   entry</p>
              <h2 class="LegSchedule">SCHEDULE 2</h2>
              <p>Second entry</p>
            </div>"#,
        );

        assert_eq!(
            schedule.content,
            "SCHEDULE 1 Repeals\nFirst entry\nSCHEDULE 2\nSecond entry\n"
        );
    }

    #[test]
    fn images_take_current_title_and_positional_names() {
        let schedule = schedule_for(
            r#"<div class="DocContainer">
              <p><img class="LegDisplayImage" src="before.png"></p>
              <div class="LegSchedule">SCHEDULE 1</div>
              <p><img class="LegDisplayImageWide" src="first.png"></p>
              <p><img class="LegDisplayImage"></p>
              <div class="LegSchedule">SCHEDULE 2</div>
            </div>"#,
        );

        assert_eq!(
            schedule.images,
            vec![
                Image {
                    alt_text: String::new(),
                    link: "before.png".to_string(),
                    name: "image_1".to_string(),
                },
                Image {
                    alt_text: "SCHEDULE 1".to_string(),
                    link: "first.png".to_string(),
                    name: "image_2".to_string(),
                },
                Image {
                    alt_text: "SCHEDULE 1".to_string(),
                    link: String::new(),
                    name: "image_3".to_string(),
                },
            ]
        );
    }

    #[test]
    fn schedule_title_keeps_inner_whitespace_of_marker_text() {
        let schedule = schedule_for(
            r#"<div class="DocContainer">
              <h2 class="LegScheduleFirst">  SCHEDULE 1
                 Repeals </h2>
              <p><img class="LegDisplayImage" src="map.png"></p>
            </div>"#,
        );

        assert_eq!(schedule.images[0].alt_text, "SCHEDULE 1\n                 Repeals");
        assert_eq!(schedule.content, "SCHEDULE 1 Repeals\n");
    }

    #[test]
    fn document_without_schedule_yields_empty_schedule() {
        let schedule = schedule_for(r#"<div class="DocContainer"><p>Only text</p></div>"#);
        assert_eq!(schedule, Schedule::default());
    }
}
