//! System instruction for the profile assistant.

use folio_types::profile::Profile;

/// Build the persona/context instruction sent with every question.
///
/// Pure and deterministic: the same profile always yields the same text.
pub fn build_system_instruction(profile: &Profile) -> String {
    let first = profile.first_name().to_uppercase();
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "You are the professional AI Assistant for {}, an {}.",
        profile.name, profile.title
    ));
    lines.push("Your goal is to represent him accurately and professionally.".to_string());
    lines.push(String::new());

    lines.push(format!("{first}'S PROFILE:"));
    lines.push(format!("- Title: {}", profile.title));
    if let Some(current) = profile.current_experience() {
        lines.push(format!("- Current Role: {} at {}", current.role, current.company));
    }
    if !profile.expertise.is_empty() {
        lines.push(format!("- Expertise: {}.", profile.expertise.join(", ")));
    }
    lines.push(format!("- Summary: {}", profile.summary));
    lines.push(format!(
        "- YouTube Channel: {} (educational content for SAP developers).",
        profile.contact.youtube_handle
    ));
    lines.push(String::new());

    lines.push("DETAILED EXPERIENCE:".to_string());
    lines.extend(profile.experiences.iter().map(|e| {
        format!(
            "- {} at {} ({}): {}",
            e.role,
            e.company,
            e.period,
            e.description.join(", ")
        )
    }));
    lines.push(String::new());

    lines.push("SKILLS:".to_string());
    lines.extend(
        profile
            .skill_groups
            .iter()
            .map(|g| format!("- {}: {}", g.category, g.skills.join(", "))),
    );
    lines.push(String::new());

    lines.push("GUIDELINES:".to_string());
    lines.push("- Be professional, concise, and helpful.".to_string());
    lines.push(format!(
        "- If asked about contact info, provide his email: {} or LinkedIn: {}.",
        profile.contact.email, profile.contact.linkedin
    ));
    lines.push(
        "- If you don't know an answer about his personal life, steer the conversation \
         back to his professional SAP expertise."
            .to_string(),
    );
    lines.push("- Use Markdown for formatting if necessary.".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
