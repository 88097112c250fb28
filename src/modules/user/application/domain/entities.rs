use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::shared::patch::{
    CreatePlan, FieldError, PatchField, PatchPlan, UniqueClaim, UniqueField,
};
use crate::shared::validation::Violations;

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{3,30}$").expect("valid username pattern"));
static PASSWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,20}$").expect("valid password pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1[3-9]\d{9}$").expect("valid phone pattern"));
static ID_CARD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{17}[\dX]$").expect("valid id card pattern"));

const REAL_NAME_MAX: usize = 50;

//
// ──────────────────────────────────────────────────────────
// User
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "男")]
    Male,
    #[serde(rename = "女")]
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "男",
            Gender::Female => "女",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "男" => Some(Gender::Male),
            "女" => Some(Gender::Female),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub real_name: Option<String>,
    pub id_card: Option<String>,
    pub gender: Option<Gender>,
    pub avatar_url: Option<String>,
    /// Accounts start inactive; only the status action flips this.
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Field rules (shared by create and patch)
// ──────────────────────────────────────────────────────────
//

fn check_username(v: &mut Violations, value: &str) {
    v.check(
        USERNAME_RE.is_match(value),
        "username",
        "must be 3-30 letters or digits",
    );
}

fn check_password(v: &mut Violations, value: &str) {
    v.check(
        PASSWORD_RE.is_match(value),
        "password",
        "must be 6-20 letters or digits",
    );
}

fn check_email(v: &mut Violations, value: &str) {
    v.check(
        EmailAddress::is_valid(value),
        "email",
        "is not a valid email address",
    );
}

fn check_phone(v: &mut Violations, value: &str) {
    v.check(
        PHONE_RE.is_match(value),
        "phone",
        "is not a valid mobile number",
    );
}

fn check_id_card(v: &mut Violations, value: &str) {
    v.check(
        ID_CARD_RE.is_match(value),
        "idCard",
        "must be 17 digits followed by a digit or X",
    );
}

fn check_gender(v: &mut Violations, value: &str) {
    v.check(Gender::parse(value).is_some(), "gender", "must be 男 or 女");
}

//
// ──────────────────────────────────────────────────────────
// Create
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub phone: String,
    pub real_name: String,
    pub id_card: String,
    pub gender: String,
    pub avatar_url: Option<String>,
}

impl NewUser {
    pub fn normalized(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            password: self.password,
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            real_name: self.real_name.trim().to_string(),
            id_card: self.id_card.trim().to_uppercase(),
            gender: self.gender.trim().to_string(),
            avatar_url: self
                .avatar_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
        }
    }
}

impl CreatePlan for NewUser {
    fn validate(&self) -> Vec<FieldError> {
        let mut v = Violations::new();

        check_username(&mut v, &self.username);
        check_password(&mut v, &self.password);
        check_email(&mut v, &self.email);
        check_phone(&mut v, &self.phone);
        if v.required("realName", &self.real_name) {
            v.max_chars("realName", &self.real_name, REAL_NAME_MAX);
        }
        check_id_card(&mut v, &self.id_card);
        check_gender(&mut v, &self.gender);

        v.into_vec()
    }

    fn unique_claims(&self) -> Vec<UniqueClaim> {
        vec![
            UniqueClaim::new(UniqueField::Username, self.username.clone()),
            UniqueClaim::new(UniqueField::IdCard, self.id_card.clone()),
        ]
    }
}

//
// ──────────────────────────────────────────────────────────
// Patch
// ──────────────────────────────────────────────────────────
//

/// `password` carries the raw password until the service swaps in its hash.
/// `status` is deliberately absent: it has its own action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub username: PatchField<String>,
    pub password: PatchField<String>,
    pub email: PatchField<String>,
    pub phone: PatchField<String>,
    pub real_name: PatchField<String>,
    pub id_card: PatchField<String>,
    pub gender: PatchField<String>,
    pub avatar_url: PatchField<String>,
}

impl PatchPlan<User> for UserPatch {
    fn normalize(self) -> Self {
        Self {
            username: self.username.blank_as_unset(),
            password: self.password.blank_as_unset(),
            email: self.email.blank_as_unset(),
            phone: self.phone.blank_as_unset(),
            real_name: self.real_name.blank_as_unset(),
            id_card: self.id_card.blank_as_unset().map(|s| s.to_uppercase()),
            gender: self.gender.blank_as_unset(),
            avatar_url: self.avatar_url.blank_as_unset(),
        }
    }

    fn present_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        self.username.mark("username", &mut fields);
        self.password.mark("password", &mut fields);
        self.email.mark("email", &mut fields);
        self.phone.mark("phone", &mut fields);
        self.real_name.mark("realName", &mut fields);
        self.id_card.mark("idCard", &mut fields);
        self.gender.mark("gender", &mut fields);
        self.avatar_url.mark("avatarUrl", &mut fields);
        fields
    }

    fn validate(&self, _current: &User) -> Vec<FieldError> {
        let mut v = Violations::new();

        v.not_null("username", &self.username);
        v.not_null("password", &self.password);
        v.not_null("email", &self.email);
        v.not_null("phone", &self.phone);
        v.not_null("realName", &self.real_name);
        v.not_null("idCard", &self.id_card);
        v.not_null("gender", &self.gender);

        if let Some(username) = self.username.as_value() {
            check_username(&mut v, username);
        }
        if let Some(password) = self.password.as_value() {
            check_password(&mut v, password);
        }
        if let Some(email) = self.email.as_value() {
            check_email(&mut v, email);
        }
        if let Some(phone) = self.phone.as_value() {
            check_phone(&mut v, phone);
        }
        if let Some(real_name) = self.real_name.as_value() {
            v.max_chars("realName", real_name, REAL_NAME_MAX);
        }
        if let Some(id_card) = self.id_card.as_value() {
            check_id_card(&mut v, id_card);
        }
        if let Some(gender) = self.gender.as_value() {
            check_gender(&mut v, gender);
        }

        v.into_vec()
    }

    fn unique_claims(&self) -> Vec<UniqueClaim> {
        let mut claims = Vec::new();
        if let Some(username) = self.username.as_value() {
            claims.push(UniqueClaim::new(UniqueField::Username, username.clone()));
        }
        if let Some(id_card) = self.id_card.as_value() {
            claims.push(UniqueClaim::new(UniqueField::IdCard, id_card.clone()));
        }
        claims
    }

    fn apply_to(&self, row: &mut User) {
        self.username.apply(&mut row.username);
        self.password.apply(&mut row.password_hash);
        self.email.apply_nullable(&mut row.email);
        self.phone.apply_nullable(&mut row.phone);
        self.real_name.apply_nullable(&mut row.real_name);
        self.id_card.apply_nullable(&mut row.id_card);
        if let Some(gender) = self.gender.as_value().and_then(|g| Gender::parse(g)) {
            row.gender = Some(gender);
        }
        self.avatar_url.apply_nullable(&mut row.avatar_url);
    }
}

//
// ──────────────────────────────────────────────────────────
// Search
// ──────────────────────────────────────────────────────────
//

/// Text filters match case-insensitively by substring; all supplied filters must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub username: Option<String>,
    pub real_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub status: Option<bool>,
}

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack
        .map(|h| h.to_lowercase().contains(&needle.to_lowercase()))
        .unwrap_or(false)
}

impl UserFilter {
    pub fn normalized(self) -> Self {
        let clean = |s: Option<String>| {
            s.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        Self {
            username: clean(self.username),
            real_name: clean(self.real_name),
            email: clean(self.email),
            phone: clean(self.phone),
            gender: self.gender,
            status: self.status,
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        self.username
            .as_deref()
            .is_none_or(|n| contains_ci(Some(&user.username), n))
            && self
                .real_name
                .as_deref()
                .is_none_or(|n| contains_ci(user.real_name.as_deref(), n))
            && self
                .email
                .as_deref()
                .is_none_or(|n| contains_ci(user.email.as_deref(), n))
            && self
                .phone
                .as_deref()
                .is_none_or(|n| contains_ci(user.phone.as_deref(), n))
            && self.gender.is_none_or(|g| user.gender == Some(g))
            && self.status.is_none_or(|s| user.status == s)
    }
}
