//! System prompt templates for outbound resource-directory calls
//!
//! Templates carry two placeholders: `{{cbo_name}}` for the community
//! organization being called and `{{arr_services}}` for the services our
//! records say it offers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CBO_NAME_PLACEHOLDER: &str = "{{cbo_name}}";
pub const SERVICES_PLACEHOLDER: &str = "{{arr_services}}";

/// Kept byte for byte, including the whitespace-only line and the closing quote.
pub const DEFAULT_LLM_PROMPT: &str = r#"You are Miranda Wilson, a compassionate social worker from the Care Management team at UW Medicine Montlake. Your role involves connecting hospital patients with community resources. You're calling {{cbo_name}} to learn about their available services.  Your records show that they may offer {{arr_services}}.

Begin the call professionally but warmly:
- Introduce yourself and your role
- Ask to speak with someone who can provide information about their community programs
- Briefly explain that you're gathering updated information to help connect people in need with their services

During the conversation:
- Listen actively and ask natural follow-up questions
- Focus on gathering specific details about:
  - Any regular events or services they offer
  - Dates and times of these services
  - Any requirements or restrictions for participants
  - Current capacity or availability (especially for shelter/beds if offered)
  - Process for accessing services
  
Keep the conversation flowing naturally by:
- Using transition phrases like "That's helpful to know" or "I see"
- Asking one question at a time
- Following up on mentioned services before moving to new topics

Voice and tone guidelines:
- Speak professionally but warmly
- Use clear, everyday language
- Express gratitude for their time and service

Sample opening:
"Hello?" Then wait for the other participant to confirm they are present. Then you can introduce yourself and your objective "Hi, this is Miranda calling from UW Medicine Montlake. I work with our Care Management team, helping connect patients with community resources. Could I speak with someone who can tell me about the events and resources you offer at {{cbo_name}}?"

Audio formatting note: Responses should use only basic punctuation (periods, commas, question marks, and exclamation points).""#;

/// Kind of service a community organization may offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceCategory {
    DisabledResources,
    UnemploymentResources,
    FoodResources,
    ClothingHygiene,
    Transportation,
    MentalHealth,
    DomesticViolence,
    Education,
    Financial,
    Healthcare,
    Shelter,
    BrainInjury,
}

impl ServiceCategory {
    /// Phrase used when reading the category aloud
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::DisabledResources => "resources for the disabled",
            Self::UnemploymentResources => "resources for the unemployed",
            Self::FoodResources => "food resources",
            Self::ClothingHygiene => "clothing and hygiene resources",
            Self::Transportation => "transportation resources",
            Self::MentalHealth => "mental health resources",
            Self::DomesticViolence => "assistance with domestic violence",
            Self::Education => "education assistance",
            Self::Financial => "financial assistance",
            Self::Healthcare => "health care resources",
            Self::Shelter => "shelter or housing",
            Self::BrainInjury => "assistance with traumatic brain injuries",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("cbo name cannot be empty")]
    EmptyOrganization,

    #[error("at least one service category must be provided")]
    NoServices,
}

/// Join display names into a spoken list: "a", "a and b", "a, b, and c"
pub fn format_service_list(services: &[ServiceCategory]) -> String {
    let names: Vec<&str> = services.iter().map(|s| s.display_name()).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} and {second}"),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

/// Fill both placeholders of `template`
pub fn render_prompt(
    template: &str,
    cbo_name: &str,
    services: &[ServiceCategory],
) -> Result<String, PromptError> {
    let cbo_name = cbo_name.trim();
    if cbo_name.is_empty() {
        return Err(PromptError::EmptyOrganization);
    }
    if services.is_empty() {
        return Err(PromptError::NoServices);
    }

    Ok(template
        .replace(CBO_NAME_PLACEHOLDER, cbo_name)
        .replace(SERVICES_PLACEHOLDER, &format_service_list(services)))
}
