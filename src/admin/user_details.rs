//! View model behind the admin table's "user details" dialog.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetails {
    pub id_user: u64,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub status: String,
    #[serde(rename = "userSkills", default)]
    pub user_skills: Vec<String>,
    #[serde(rename = "userWorkingAreas", default)]
    pub user_working_areas: Vec<String>,
}

impl UserDetails {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAddress {
    pub state_name: String,
    pub colony_name: String,
    pub municipality_name: String,
    pub main_number: u32,
    #[serde(default)]
    pub interior_number: u32,
    pub street_name: String,
}

impl UserAddress {
    /// `Street 12 Int. 3, Colony, Municipality, State`; interior number 0 means none.
    pub fn address_line(&self) -> String {
        let mut street = format!("{} {}", self.street_name, self.main_number);
        if self.interior_number != 0 {
            street.push_str(&format!(" Int. {}", self.interior_number));
        }

        [
            street.as_str(),
            self.colony_name.as_str(),
            self.municipality_name.as_str(),
            self.state_name.as_str(),
        ]
        .iter()
        .filter(|part| !part.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogData {
    pub user_information: UserDetails,
    pub user_address_information: UserAddress,
    pub user_professions: String,
    pub user_areas: String,
}

impl DialogData {
    pub fn new(user: UserDetails, address: UserAddress) -> Self {
        let user_professions = user.user_skills.join(", ");
        let user_areas = user.user_working_areas.join(", ");
        Self {
            user_information: user,
            user_address_information: address,
            user_professions,
            user_areas,
        }
    }
}
