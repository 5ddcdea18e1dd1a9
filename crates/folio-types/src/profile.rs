//! Static biography shown on the site and used to ground the assistant.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub summary: String,
    pub location: String,
    pub education: String,
    pub philosophy: String,
    /// Headline keywords, listed as "Expertise" in the assistant prompt
    pub expertise: Vec<String>,
    pub contact: ContactChannels,
    /// Most recent first; the first entry is the current role
    pub experiences: Vec<Experience>,
    pub skill_groups: Vec<SkillGroup>,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactChannels {
    pub email: String,
    pub linkedin: String,
    pub youtube_handle: String,
    pub youtube_url: String,
    pub portfolio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub location: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
}

impl Profile {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn current_experience(&self) -> Option<&Experience> {
        self.experiences.first()
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact.email)
    }

    /// The biography baked into the site
    pub fn builtin() -> Self {
        Self {
            name: "Ravindra Kumar Tripathi".to_string(),
            title: "SAP Software Developer".to_string(),
            subtitle: "Ex-Merkle | ABAP | SAP S/4HANA | SQL | Creator @CodeAbap".to_string(),
            summary: "I’m an SAP ABAP Developer with 1.5 years of hands-on experience in \
                S/4HANA development, RICEF objects, and ABAP on HANA performance optimization. \
                Skilled in CDS Views, OData Services, ALV Reports, and modular programming, \
                I focus on writing clean, efficient, and scalable code aligned with SAP’s \
                modern development standards."
                .to_string(),
            location: "Lucknow, Uttar Pradesh, India".to_string(),
            education: "Bachelor's Degree, Integral University".to_string(),
            philosophy: "Clean code is not just a preference; in the SAP ecosystem, it is the \
                bedrock of business continuity and scalability. I aim to turn complex \
                requirements into elegant, high-performance logic."
                .to_string(),
            expertise: strings(&["ABAP", "S/4HANA", "RICEF", "CDS Views", "OData", "SQL"]),
            contact: ContactChannels {
                email: "tripathiravindra212@gmail.com".to_string(),
                linkedin: "https://www.linkedin.com/in/ravindra5".to_string(),
                youtube_handle: "@CodeAbap".to_string(),
                youtube_url: "https://www.youtube.com/@CodeAbap".to_string(),
                portfolio: "ravindra-kumar-tripathi-gjm3ctw.gamma.site/".to_string(),
            },
            experiences: vec![
                Experience {
                    company: "HCLTech".to_string(),
                    role: "Software Developer".to_string(),
                    period: "December 2024 - Present".to_string(),
                    location: "Lucknow, India".to_string(),
                    description: strings(&[
                        "Developed custom ABAP programs in S/4HANA (FI, SD, MM modules).",
                        "Built CDS Views and OData Services for real-time analytics and Fiori integration.",
                        "Enhanced system performance through Open SQL and modular programming.",
                        "Supported end-to-end development and debugging in ABAP on HANA.",
                    ]),
                },
                Experience {
                    company: "Freelance (Self employed)".to_string(),
                    role: "Freelance Abap Developer".to_string(),
                    period: "March 2024 - December 2024".to_string(),
                    location: "Hyderabad, India".to_string(),
                    description: strings(&[
                        "Designed custom tables, transaction codes, and background jobs.",
                        "Automated repetitive business workflows through ABAP enhancements.",
                        "Delivered small-scale custom solutions improving process efficiency.",
                    ]),
                },
                Experience {
                    company: "Merkle".to_string(),
                    role: "Associate Analyst".to_string(),
                    period: "September 2023 - December 2023".to_string(),
                    location: "Mumbai, India".to_string(),
                    description: strings(&[
                        "Assisted in data operations and reporting using SQL and Excel.",
                        "Collaborated on e-commerce system enhancements and validations.",
                        "Gained early exposure to business processes and system integration.",
                    ]),
                },
                Experience {
                    company: "Merkle".to_string(),
                    role: "Consultant, Digital Commerce".to_string(),
                    period: "January 2022 - September 2023".to_string(),
                    location: "Mumbai, India".to_string(),
                    description: strings(&[
                        "Managed client issues and SLA-driven incident resolution.",
                        "Conducted staging, QA checks, and inventory reconciliation.",
                        "Assisted in tool enhancements and regular operational validations.",
                    ]),
                },
            ],
            skill_groups: vec![
                SkillGroup {
                    category: "RICEF & Enhancement".to_string(),
                    skills: strings(&["RICEF", "Enhancements", "ALV Reports", "Smartforms", "Debugging"]),
                },
                SkillGroup {
                    category: "SAP S/4HANA & Database".to_string(),
                    skills: strings(&["S/4HANA", "ABAP on HANA", "CDS Views", "OData", "AMDP", "Open SQL"]),
                },
                SkillGroup {
                    category: "Quality & Performance".to_string(),
                    skills: strings(&[
                        "Performance Tuning",
                        "Modularization",
                        "Clean ABAP",
                        "SAP Fiori Integration",
                        "SQL",
                    ]),
                },
            ],
            certifications: [
                "SQL",
                "AI Software engineer:-level 3",
                "SAP ABAP on sap cloud",
                "SAP ECC to S/4HANA Transformation - Bluefield",
                "SQL Basic",
            ]
            .iter()
            .map(|name| Certification { name: name.to_string() })
            .collect(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
