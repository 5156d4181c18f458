//! Step prompt table and agent instruction templates.
//!
//! A fixed lookup keyed by wizard step: chat message, quick-option labels, and
//! the per-step task handed to the remote agent. The table is the single
//! source of truth for what each step presents; the agent decides *when* to
//! advance, this module decides *what* a given step looks like.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::onboarding::step::{OnboardingStep, TOTAL_STEPS};
use crate::domain::profile::ProfileItem;

/// Everything the UI needs to render one wizard step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepPrompt {
    pub step: OnboardingStep,
    pub title: &'static str,
    /// The assistant message opening this step.
    pub message: &'static str,
    /// Quick-select button labels. Empty once the wizard is complete.
    pub quick_options: &'static [&'static str],
    /// What the remote agent should do during this step.
    pub agent_task: &'static str,
}

static PROMPTS: Lazy<HashMap<OnboardingStep, StepPrompt>> = Lazy::new(|| {
    [
        StepPrompt {
            step: OnboardingStep::Goals,
            title: "Welcome",
            message: "Great to meet you. I'm here to help you find amazing fractional opportunities.\n\nFirst up - what brings you to Fractional Quest today?",
            quick_options: &["Job Search", "Career Coaching", "Lifestyle Change", "Just Curious"],
            agent_task: "Find out why they're here, then confirm their goal with the quick options. Be warm and friendly.",
        },
        StepPrompt {
            step: OnboardingStep::EmploymentStatus,
            title: "Employment Status",
            message: "Awesome choice! 🎯\n\nNow, what's your current work situation?",
            quick_options: &["Currently Employed", "Between Roles", "Freelancing", "Founder"],
            agent_task: "Acknowledge their goal warmly, then ask about their current work situation.",
        },
        StepPrompt {
            step: OnboardingStep::ProfessionalDomain,
            title: "Professional Domain",
            message: "You're doing great! 💪\n\nWhat's your professional area of expertise?",
            quick_options: &["Technology", "Finance", "Marketing", "Operations", "HR/People", "Product"],
            agent_task: "Acknowledge their status, then ask for their professional area of expertise.",
        },
        StepPrompt {
            step: OnboardingStep::Location,
            title: "Location",
            message: "Almost there! 🏁\n\nWhere are you based, and what's your preferred work style?",
            quick_options: &["London", "Manchester", "Remote UK", "Hybrid"],
            agent_task: "Ask where they are based and their preferred work arrangement (remote, hybrid, onsite).",
        },
        StepPrompt {
            step: OnboardingStep::Experience,
            title: "Target Role",
            message: "Last step! 🚀\n\nWhat role are you targeting?",
            quick_options: &["CTO", "CFO", "CMO", "COO", "CHRO", "CPO"],
            agent_task: "Ask for their target role, experience level, and day rate expectations. Save each answer separately.",
        },
        StepPrompt {
            step: OnboardingStep::Complete,
            title: "Complete!",
            message: "🎉 Amazing! Your profile is all set!\n\nBased on what you've told me, I can now find you the perfect fractional opportunities. Ready to see what's out there?",
            quick_options: &[],
            agent_task: "Congratulate them, summarize what you learned, and offer to find matching jobs.",
        },
    ]
    .into_iter()
    .map(|p| (p.step, p))
    .collect()
});

/// Looks up the prompt for a step.
pub fn prompt_for(step: OnboardingStep) -> &'static StepPrompt {
    PROMPTS
        .get(&step)
        .expect("prompt table covers every OnboardingStep variant")
}

/// Builds the initial chat message for a session, interpolating the user's
/// first name. Three variants: fresh start, resume, and completed wizard.
pub fn greeting(step: OnboardingStep, first_name: &str) -> String {
    if step.is_complete() {
        format!(
            "Welcome back, {first_name}! 🎉 Your profile is all set. Ready to find some amazing opportunities?"
        )
    } else if step == OnboardingStep::Goals {
        format!(
            "Hey {first_name}! 👋 Welcome to Fractional Quest!\n\nI'm here to help you find incredible fractional executive opportunities. Let's get to know each other in just {TOTAL_STEPS} quick steps.\n\nFirst up - what brings you here today?"
        )
    } else {
        format!(
            "Let's continue building your profile, {first_name}! We're on step {} of {TOTAL_STEPS}.",
            step.number()
        )
    }
}

/// Builds the full instruction prompt handed to the remote agent for the
/// current step: behavioral ground rules, the step task, and the profile
/// collected so far.
pub fn agent_instructions(
    step: OnboardingStep,
    first_name: &str,
    items: &[ProfileItem],
) -> String {
    let prompt = prompt_for(step);

    let profile_so_far = if items.is_empty() {
        "No items yet - this is a fresh start!".to_string()
    } else {
        items
            .iter()
            .map(|i| format!("- {}: {}", i.item_type, i.value))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "## ONBOARDING WIZARD MODE\n\
         \n\
         You are guiding {first_name} through a {TOTAL_STEPS}-step profile setup. Current step: {} of {TOTAL_STEPS}.\n\
         \n\
         ### BEHAVIOR\n\
         1. Be warm, friendly, and encouraging\n\
         2. Ask ONE question at a time\n\
         3. Acknowledge each answer before moving to the next question\n\
         4. Keep responses SHORT and conversational\n\
         \n\
         ### CURRENT STEP: {}\n\
         {}\n\
         \n\
         ### PROFILE SO FAR\n\
         {profile_so_far}\n",
        step.number(),
        prompt.title,
        prompt.agent_task,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::ItemType;

    #[test]
    fn step_one_has_exactly_the_four_goal_options() {
        let prompt = prompt_for(OnboardingStep::Goals);
        assert_eq!(
            prompt.quick_options,
            &["Job Search", "Career Coaching", "Lifestyle Change", "Just Curious"]
        );
    }

    #[test]
    fn every_question_step_has_quick_options() {
        for step in OnboardingStep::all() {
            let prompt = prompt_for(*step);
            assert_eq!(prompt.step, *step);
            assert!(
                !prompt.quick_options.is_empty(),
                "step {} should offer quick options",
                step.number()
            );
        }
    }

    #[test]
    fn complete_step_offers_no_quick_options() {
        assert!(prompt_for(OnboardingStep::Complete).quick_options.is_empty());
    }

    #[test]
    fn complete_step_uses_celebration_message() {
        let prompt = prompt_for(OnboardingStep::Complete);
        assert!(prompt.message.contains("🎉"));
        assert!(prompt.message.contains("all set"));
    }

    #[test]
    fn greeting_on_first_step_references_first_name() {
        let msg = greeting(OnboardingStep::Goals, "Priya");
        assert!(msg.contains("Priya"));
        assert!(msg.contains("what brings you here"));
    }

    #[test]
    fn greeting_mid_wizard_names_the_step() {
        let msg = greeting(OnboardingStep::Location, "Priya");
        assert!(msg.contains("step 4 of 5"));
    }

    #[test]
    fn greeting_when_complete_is_the_welcome_back_variant() {
        let msg = greeting(OnboardingStep::Complete, "Priya");
        assert!(msg.contains("Welcome back"));
        assert!(msg.contains("🎉"));
    }

    #[test]
    fn instructions_include_step_number_and_name() {
        let text = agent_instructions(OnboardingStep::ProfessionalDomain, "Priya", &[]);
        assert!(text.contains("Priya"));
        assert!(text.contains("Current step: 3 of 5"));
        assert!(text.contains("No items yet"));
    }

    #[test]
    fn instructions_list_collected_items() {
        let items = vec![
            ProfileItem::new(ItemType::Trinity, "Job Search").unwrap(),
            ProfileItem::new(ItemType::Skill, "Rust").unwrap(),
        ];
        let text = agent_instructions(OnboardingStep::EmploymentStatus, "Priya", &items);
        assert!(text.contains("- trinity: Job Search"));
        assert!(text.contains("- skill: Rust"));
        assert!(!text.contains("No items yet"));
    }
}
