//! Person domain entity and directory role classification.

use crate::config::{
    DEFAULT_PROFILE_IMAGE, RANK_STAFF, ROLE_AFFILIATE, ROLE_DIRECTOR, ROLE_STAFF,
    UPLOADED_IMAGE_DIR,
};

/// Sections a center listing is split into, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Director,
    Staff,
    Affiliate,
}

impl Role {
    /// Every listed role in display order
    pub const ALL: [Role; 3] = [Role::Director, Role::Staff, Role::Affiliate];

    /// Map a raw `role_name` onto a listed role. Unlisted roles yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            ROLE_DIRECTOR => Some(Role::Director),
            ROLE_STAFF => Some(Role::Staff),
            ROLE_AFFILIATE => Some(Role::Affiliate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Director => ROLE_DIRECTOR,
            Role::Staff => ROLE_STAFF,
            Role::Affiliate => ROLE_AFFILIATE,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A person's membership in an organizational unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    /// Namespaced unit id, e.g. `centers:metalab`
    pub parent_entity: String,
    pub role_name: String,
}

/// Faculty or staff member
#[derive(Debug, Clone)]
pub struct Person {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub email: String,
    pub rank: Option<String>,
    /// Uploaded photo file name, if any
    pub image: Option<String>,
    /// Memberships loaded for the unit being listed
    pub memberships: Vec<Membership>,
}

impl Person {
    /// Role name this person is listed under.
    ///
    /// A director membership wins outright. Otherwise the first membership
    /// decides, unless the person's rank is `staff`.
    pub fn listing_role_name(&self) -> Option<&str> {
        if let Some(director) = self
            .memberships
            .iter()
            .find(|m| m.role_name == ROLE_DIRECTOR)
        {
            return Some(director.role_name.as_str());
        }

        let first = self.memberships.first()?;
        if self.rank.as_deref() == Some(RANK_STAFF) {
            return Some(ROLE_STAFF);
        }
        Some(first.role_name.as_str())
    }

    /// Listed section for this person, `None` when the role is not displayed
    pub fn listing_role(&self) -> Option<Role> {
        self.listing_role_name().and_then(Role::from_name)
    }

    /// Image path relative to the image host
    pub fn image_path(&self) -> String {
        match &self.image {
            Some(src) => format!("{}{}", UPLOADED_IMAGE_DIR, src),
            None => DEFAULT_PROFILE_IMAGE.to_string(),
        }
    }

    /// Profile slug: the local part of the email address
    pub fn email_uri(&self) -> &str {
        match self.email.split_once('@') {
            Some((local, _)) => local,
            None => &self.email,
        }
    }

    /// Rank shown on the card (empty when unknown)
    pub fn rank_label(&self) -> &str {
        self.rank.as_deref().unwrap_or_default()
    }
}
