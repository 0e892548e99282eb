//! Person card listings for centers and departments.

use std::collections::BTreeMap;

use super::markup::{escape_html, remove_control_characters, title_case};
use crate::config::{Config, DEPARTMENT_SECTION};
use crate::domain::{Person, Role};

/// Styles shipped with every people listing
const LISTING_STYLE: &str = "
<style>
    .jewel-media{
        margin: 25px 0;
    }
    .jewel-media-left{
        display: table-cell;
        vertical-align: middle;
    }
    .jewel-media-body{
        display: table-cell;
        vertical-align: middle;
        width: 500px;
    }
    .jewel-url a{
        color: #CF0A2C;
    }
    .jewel-img {
        float: left;
        max-width: 150px;
        display: block;
        vertical-align: middle;
    }
    .jewel-role-name{
        font-size: 1.15em;
    }
    .jewel-display-name{
        color: #4a4a4a;
        font-size: 1.4em;
        margin: 5px 0;
    }
    .jewel{
        color: #4a4a4a;
        list-style:outside none;
        clear: both;
    }
</style>
";

/// Hosts that card images and profile links point at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileLinks {
    pub image_base_url: String,
    pub profile_base_url: String,
}

impl ProfileLinks {
    pub fn from_config(config: &Config) -> Self {
        Self {
            image_base_url: config.image_base_url.clone(),
            profile_base_url: config.profile_base_url.clone(),
        }
    }
}

impl Default for ProfileLinks {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Render a single person card
pub fn person_card(person: &Person, links: &ProfileLinks) -> String {
    let name = escape_html(&person.display_name);
    let email = escape_html(&person.email);

    format!(
        "
        <div class='jewel-media'>
            <div class='jewel-media-left'>
                <img class='jewel-img' src='{image_base}{image}' alt='Image of {name}'>
            </div>
            <div class='jewel-media-body'>
                <ul class='jewel'>
                    <li class='jewel-faculty-name'><h3 class='jewel-display-name'>{name}</h3></li>
                    <li class='jewel-role-name'>{rank}</li>
                    <li class='jewel-email'><strong>Email: </strong><a href='mailto:{email}'>{email}</a></li>
                    <li class='jewel-url'><a target='_blank' href='{profile_base}{profile}'>View Profile</a></li>
                </ul>
            </div>
        </div>
        ",
        image_base = links.image_base_url,
        image = escape_html(&person.image_path()),
        name = name,
        rank = escape_html(person.rank_label()),
        email = email,
        profile_base = links.profile_base_url,
        profile = escape_html(person.email_uri()),
    )
}

/// Section heading followed by its cards and a rule
fn section(id: &str, cards: &str) -> String {
    format!(
        "<h2 id='{}'>{}</h2>{}<hr>",
        id.to_lowercase(),
        title_case(id),
        cards
    )
}

/// Render a center listing split into director, staff and affiliate sections.
///
/// People whose role is not one of those sections are left out, as are
/// empty sections.
pub fn center_listing(people: &[Person], links: &ProfileLinks) -> String {
    let mut sections: BTreeMap<Role, String> = BTreeMap::new();

    for person in people {
        match person.listing_role() {
            Some(role) => sections
                .entry(role)
                .or_default()
                .push_str(&person_card(person, links)),
            None => tracing::debug!(
                person = %person.id,
                role = ?person.listing_role_name(),
                "Skipping person without a listed role"
            ),
        }
    }

    let mut markup = String::from(LISTING_STYLE);
    for role in Role::ALL {
        if let Some(cards) = sections.get(&role) {
            markup.push_str(&section(role.as_str(), cards));
        }
    }

    remove_control_characters(&markup)
}

/// Render a department listing as a single faculty section.
pub fn department_listing(people: &[Person], links: &ProfileLinks) -> String {
    let mut markup = String::from(LISTING_STYLE);

    if !people.is_empty() {
        let cards: String = people.iter().map(|p| person_card(p, links)).collect();
        markup.push_str(&section(DEPARTMENT_SECTION, &cards));
    }

    remove_control_characters(&markup)
}
