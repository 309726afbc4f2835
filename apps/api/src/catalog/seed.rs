//! Built-in reference tables: the mentor roster, concern survey, impulse
//! support catalog, skill checklist, and the skill-to-job inverted index.

use std::collections::HashMap;

use super::ReferenceData;
use crate::models::career::{JobIndex, Skill, SkillCategories};
use crate::models::impulse::ImpulseCategory;
use crate::models::mentor::{MatchStrategy, MentorProfile, SurveyOption, SurveyQuestion};

pub(super) fn builtin() -> ReferenceData {
    ReferenceData {
        mentors: mentors(),
        survey: survey(),
        impulse_categories: impulse_categories(),
        skill_categories: skill_categories(),
        job_index: job_index(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn weights(entries: &[(&str, f64)]) -> HashMap<String, f64> {
    entries
        .iter()
        .map(|(tag, weight)| (tag.to_string(), *weight))
        .collect()
}

fn mentors() -> Vec<MentorProfile> {
    vec![
        MentorProfile {
            id: "social-butterfly".to_string(),
            name: "Emily Rodriguez".to_string(),
            profession: "Community Outreach Coordinator".to_string(),
            keyword_weights: weights(&[
                ("lonely", 0.9),
                ("social-anxiety", 1.0),
                ("connection", 0.8),
                ("communication", 0.7),
                ("introversion", 0.6),
            ]),
            match_strategy: MatchStrategy {
                primary_focus: strings(&["social-skills", "emotional-support"]),
                secondary_focus: strings(&["personal-growth"]),
            },
            bio: "Emily is a vibrant community connector with a passion for helping people \
                  build meaningful relationships. She's overcome her own social challenges \
                  and loves creating supportive environments."
                .to_string(),
            specialties: strings(&[
                "Active Listening",
                "Social Skill Development",
                "Group Facilitation",
            ]),
            available_times: strings(&["Weekday evenings", "Weekend mornings"]),
            testimonials: strings(&[
                "Emily helped me overcome my social anxiety and build lasting friendships.",
                "Her approach to social skills development is practical and effective.",
            ]),
        },
        MentorProfile {
            id: "wellness-guide".to_string(),
            name: "Michael Chen".to_string(),
            profession: "Mental Health Counselor".to_string(),
            keyword_weights: weights(&[
                ("depression", 1.0),
                ("anxiety", 0.9),
                ("stress-management", 0.8),
                ("mindfulness", 0.7),
                ("cognitive-behavioral", 0.6),
            ]),
            match_strategy: MatchStrategy {
                primary_focus: strings(&["mental-health", "coping-strategies"]),
                secondary_focus: strings(&["professional-development"]),
            },
            bio: "Michael specializes in holistic wellness approaches, combining professional \
                  counseling with practical life strategies. He believes in empowering \
                  individuals through personalized support."
                .to_string(),
            specialties: strings(&[
                "CBT Techniques",
                "Stress Reduction",
                "Mindfulness Practice",
            ]),
            available_times: strings(&["Weekday afternoons", "Weekend afternoons"]),
            testimonials: strings(&[
                "Michael's mindfulness techniques changed my life completely.",
                "His approach to anxiety management is both practical and effective.",
            ]),
        },
        MentorProfile {
            id: "tech-balance".to_string(),
            name: "Sarah Thompson".to_string(),
            profession: "Digital Wellness Coach".to_string(),
            keyword_weights: weights(&[
                ("tech-addiction", 1.0),
                ("screen-time", 0.9),
                ("work-life-balance", 0.8),
                ("productivity", 0.7),
                ("digital-detox", 0.9),
            ]),
            match_strategy: MatchStrategy {
                primary_focus: strings(&["digital-wellness", "behavior-modification"]),
                secondary_focus: strings(&["productivity-optimization"]),
            },
            bio: "Sarah is a certified digital wellness coach who helps people develop \
                  healthier relationships with technology. She combines behavioral psychology \
                  with practical strategies to achieve digital balance."
                .to_string(),
            specialties: strings(&[
                "Digital Detox Planning",
                "Mindful Technology Use",
                "Productivity Optimization",
            ]),
            available_times: strings(&["Flexible scheduling", "Virtual sessions available"]),
            testimonials: strings(&[
                "Sarah helped me break free from my social media addiction.",
                "Her digital wellness strategies improved both my work and personal life.",
            ]),
        },
    ]
}

fn survey() -> SurveyQuestion {
    let option = |id: &str, label: &str| SurveyOption {
        id: id.to_string(),
        label: label.to_string(),
    };
    SurveyQuestion {
        prompt: "What best describes your current challenges?".to_string(),
        options: vec![
            option("lonely", "Feeling Lonely or Isolated"),
            option("depression", "Experiencing Depression"),
            option("anxiety", "Dealing with Anxiety"),
            option("stress", "Overwhelmed by Stress"),
            option("tech-addiction", "Technology Overuse"),
            option("work-life-balance", "Work-Life Balance"),
        ],
    }
}

fn impulse_categories() -> Vec<ImpulseCategory> {
    vec![
        ImpulseCategory {
            id: "drug-addiction".to_string(),
            name: "Drug Addiction".to_string(),
            description: "Wearable Device Support for Substance Abuse Recovery".to_string(),
            details: strings(&[
                "Real-time craving detection",
                "Gentle vibration alerts when high-risk situations are detected",
                "Immediate access to support resources",
                "Optional emergency contact notification",
                "Progress tracking and milestone celebrations",
            ]),
            device_feature: "The watch provides a mild, attention-grabbing vibration when \
                             detecting physiological signs of drug craving, helping interrupt \
                             potentially harmful thought patterns."
                .to_string(),
            support_resources: strings(&[
                "24/7 Crisis Hotline",
                "Local Support Group Finder",
                "Medical Professional Directory",
                "Recovery Progress Journal",
            ]),
        },
        ImpulseCategory {
            id: "gambling".to_string(),
            name: "Gambling Addiction".to_string(),
            description: "Financial and Behavioral Impulse Control".to_string(),
            details: strings(&[
                "Proximity alerts near gambling establishments",
                "Spending pattern monitoring",
                "Stress level tracking",
                "Immediate financial counseling connection",
                "Budget management tools",
            ]),
            device_feature: "Monitors heart rate and skin conductance to detect heightened \
                             excitement typical of gambling urges, providing discrete alerts \
                             to help maintain control."
                .to_string(),
            support_resources: strings(&[
                "Financial Advisory Services",
                "Gambling Blocker Tools",
                "Support Group Locator",
                "Recovery Timeline Tracker",
            ]),
        },
        ImpulseCategory {
            id: "social-media".to_string(),
            name: "Social Media Addiction".to_string(),
            description: "Digital Wellness and Screen Time Management".to_string(),
            details: strings(&[
                "Screen time tracking and alerts",
                "App usage pattern analysis",
                "Mindful browsing reminders",
                "Social media-free period scheduling",
                "Alternative activity suggestions",
                "Digital wellbeing score",
            ]),
            device_feature: "Tracks screen time patterns and provides haptic feedback when \
                             usage exceeds healthy limits, encouraging breaks and mindful \
                             technology use."
                .to_string(),
            support_resources: strings(&[
                "Digital Detox Guidelines",
                "Productivity Apps",
                "Mindfulness Exercises",
                "Offline Activity Suggestions",
            ]),
        },
    ]
}

fn skill_categories() -> SkillCategories {
    let skill = |id: &str, label: &str| Skill {
        id: id.to_string(),
        label: label.to_string(),
    };
    SkillCategories {
        technical: vec![
            skill("coding", "Coding"),
            skill("computer", "Computer Literacy"),
            skill("design", "Design"),
            skill("data-analysis", "Data Analysis"),
            skill("digital-marketing", "Digital Marketing"),
        ],
        business: vec![
            skill("finance", "Finance/Accounting"),
            skill("analytical", "Analytical Skills"),
            skill("research", "Research"),
            skill("project-management", "Project Management"),
            skill("strategic-planning", "Strategic Planning"),
        ],
        soft: vec![
            skill("communication", "Communication"),
            skill("leadership", "Leadership"),
            skill("critical", "Critical Thinking"),
            skill("emotional-intelligence", "Emotional Intelligence"),
            skill("adaptability", "Adaptability"),
        ],
    }
}

fn job_index() -> JobIndex {
    let entries: &[(&str, &[&str])] = &[
        (
            "finance",
            &[
                "Financial Analyst",
                "Accountant",
                "Investment Banker",
                "Financial Planner",
                "Risk Analyst",
            ],
        ),
        (
            "communication",
            &[
                "Public Relations Manager",
                "Content Strategist",
                "Corporate Trainer",
                "Communications Director",
                "Technical Writer",
            ],
        ),
        (
            "leadership",
            &[
                "Project Manager",
                "Team Lead",
                "Department Director",
                "Operations Manager",
                "Executive Director",
            ],
        ),
        (
            "computer",
            &[
                "IT Support Specialist",
                "Systems Administrator",
                "Digital Marketing Specialist",
                "Cloud Engineer",
                "DevOps Engineer",
            ],
        ),
        (
            "design",
            &[
                "UX Designer",
                "Graphic Designer",
                "Product Designer",
                "UI Developer",
                "Art Director",
            ],
        ),
        (
            "analytical",
            &[
                "Data Analyst",
                "Business Intelligence Analyst",
                "Market Research Analyst",
                "Operations Analyst",
                "Systems Analyst",
            ],
        ),
        (
            "critical",
            &[
                "Management Consultant",
                "Strategy Analyst",
                "Operations Manager",
                "Business Strategist",
                "Policy Analyst",
            ],
        ),
        (
            "research",
            &[
                "Market Researcher",
                "Research Scientist",
                "Business Analyst",
                "UX Researcher",
                "Data Scientist",
            ],
        ),
        (
            "coding",
            &[
                "Software Developer",
                "Full Stack Engineer",
                "Mobile App Developer",
                "AI Engineer",
                "Backend Developer",
            ],
        ),
        (
            "data-analysis",
            &[
                "Data Scientist",
                "Analytics Manager",
                "Quantitative Analyst",
                "Business Intelligence Developer",
            ],
        ),
        (
            "digital-marketing",
            &[
                "Digital Marketing Manager",
                "SEO Specialist",
                "Social Media Manager",
                "Content Marketing Manager",
            ],
        ),
        (
            "project-management",
            &["Project Manager", "Program Manager", "Scrum Master", "Product Owner"],
        ),
        (
            "strategic-planning",
            &[
                "Strategy Consultant",
                "Business Development Manager",
                "Strategic Planning Director",
            ],
        ),
        (
            "emotional-intelligence",
            &[
                "HR Manager",
                "Customer Success Manager",
                "Sales Manager",
                "Talent Development Specialist",
            ],
        ),
        (
            "adaptability",
            &[
                "Change Management Consultant",
                "Innovation Manager",
                "Agile Coach",
                "Digital Transformation Manager",
            ],
        ),
    ];

    let map: HashMap<String, Vec<String>> = entries
        .iter()
        .map(|(skill_id, titles)| (skill_id.to_string(), strings(titles)))
        .collect();
    JobIndex::from(map)
}
