//! College citation listing grouped into per-year accordions.

use super::markup::{accordion, remove_control_characters, AccordionEntry};
use crate::domain::{group_by_year, Citation};

/// Keeps author links inside accordion headers inline and readable
const ACCORDION_LINK_STYLE: &str = "
<style type=\"text/css\">
    .ui-accordion-icons .ui-accordion-header a {
        display:inline;
        padding:0;
        color:#000000;
        text-decoration:underline;
    }
</style>";

/// Asks the host Drupal page to turn the markup into accordions
const ACCORDION_SCRIPT: &str = "
<script type=\"text/javascript\">
    (function ($) {
        Drupal.attachBehaviors($('.jewel-accordion'));
    })(jQuery);
</script>
";

/// Formatted citation with every author's IEEE short name linked to their profile.
pub fn linked_header(citation: &Citation) -> String {
    let mut header = citation.formatted_text().to_string();

    for author in citation.authors() {
        let Some(name) = author.ieee_name() else {
            continue;
        };
        let profile = author.profile.as_deref().unwrap_or_default();
        let link = format!(
            "<a href=\"{}\" target=\"_blank\">{}</a>",
            profile, name
        );
        header = header.replace(&name, &link);
    }

    header
}

fn abstract_block(citation: &Citation) -> String {
    format!(
        "
        <p>
            <strong>Abstract:</strong>
        </p>
        <p>
            {}
        </p>
        ",
        citation.abstract_or_placeholder()
    )
}

/// Render every listable citation under a descending year heading.
pub fn college_citations(citations: Vec<Citation>) -> String {
    let mut markup = String::from(ACCORDION_LINK_STYLE);

    for group in group_by_year(citations) {
        let entries: Vec<AccordionEntry> = group
            .citations
            .iter()
            .map(|citation| AccordionEntry {
                header: linked_header(citation),
                content: abstract_block(citation),
            })
            .collect();

        markup.push_str(&format!("<h3>{}</h3>", group.year));
        markup.push_str(&accordion(&entries));
    }

    markup.push_str(ACCORDION_SCRIPT);
    remove_control_characters(&markup)
}
