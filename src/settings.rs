use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use dotenv::dotenv;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub site_name: String,
    /// Shown on the contact page. May be written as `${VAR}` to read from the environment.
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    pub opening_hours: String,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site_name: "TurfBook".to_string(),
            contact_email: "hello@turfbook.in".to_string(),
            contact_phone: "+91 98765 43210".to_string(),
            address: "Old Mumbai-Pune Highway, Lonavala, Maharashtra 410401".to_string(),
            opening_hours: "Open every day, 1:00 AM to 9:00 PM".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        dotenv().ok();

        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let mut settings: Settings = serde_yaml::from_str(&contents)?;

        settings.contact_email = parse_env_var(&settings.contact_email)?;
        settings.contact_phone = parse_env_var(&settings.contact_phone)?;

        Ok(settings)
    }

    /// A missing file means defaults; a broken one is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("{} not found, using built-in settings", path.display());
            return Ok(Self::default());
        }
        Self::from_yaml(path)
    }

    pub fn contact_details(&self) -> ContactDetails {
        ContactDetails {
            email: self.contact_email.clone(),
            phone: self.contact_phone.clone(),
            address: self.address.clone(),
            opening_hours: self.opening_hours.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub opening_hours: String,
}

fn parse_env_var(value: &str) -> Result<String, Box<dyn std::error::Error>> {
    if value.starts_with("${") && value.ends_with("}") {
        let env_name = &value[2..value.len() - 1];
        match env::var(env_name) {
            Ok(val) => Ok(val),
            Err(_) => Err(format!("Environment variable '{}' not found", env_name).into()),
        }
    } else {
        Ok(value.to_string())
    }
}
