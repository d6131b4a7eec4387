use serde::{Deserialize, Serialize};
use thiserror::Error;

const TEAM_JSON: &str = include_str!("../static/team.json");

/// One person shown on a member card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub department: String,
    pub email: String,
    pub profile_image: String,
}

#[derive(Debug, Error)]
pub enum MemberError {
    #[error("failed to parse member data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("member #{index} has an empty `{field}`")]
    BlankField { index: usize, field: &'static str },
    #[error("member #{index} has an invalid email {email:?}")]
    InvalidEmail { index: usize, email: String },
}

impl Member {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `index` is only used to point at the offending record in errors.
    pub fn validate(&self, index: usize) -> Result<(), MemberError> {
        let fields = [
            ("name", &self.name),
            ("department", &self.department),
            ("email", &self.email),
            ("profile_image", &self.profile_image),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(MemberError::BlankField { index, field });
            }
        }

        let email = self.email.trim();
        let valid = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace)
            }
            None => false,
        };
        if !valid {
            return Err(MemberError::InvalidEmail {
                index,
                email: self.email.clone(),
            });
        }
        Ok(())
    }
}

/// People listed on the placement team and career counselling pages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Roster {
    pub placement_team: Vec<Member>,
    pub career_counsellors: Vec<Member>,
}

impl Roster {
    pub fn from_json(text: &str) -> Result<Self, MemberError> {
        let roster: Roster = serde_json::from_str(text)?;
        for (i, m) in roster
            .placement_team
            .iter()
            .chain(roster.career_counsellors.iter())
            .enumerate()
        {
            m.validate(i)?;
        }
        Ok(roster)
    }

    pub fn embedded() -> Result<Self, MemberError> {
        Self::from_json(TEAM_JSON)
    }
}
