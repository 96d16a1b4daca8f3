use serde::Serialize;

struct Step {
    title: &'static str,
    description: &'static str,
    image: &'static str,
}

/// The fixed first-run walkthrough. No branching and no skipping; the only
/// way out is through the last step.
const STEPS: [Step; 3] = [
    Step {
        title: "Step 1: Add a Note",
        description:
            "Click the 'Add Note' button on the dashboard to start creating your first note.",
        image: "https://images.pexels.com/photos/3278757/pexels-photo-3278757.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Step {
        title: "Step 2: Summarize Your Content",
        description:
            "After writing your content, click 'Summarize' to auto-generate a summary and tags using AI.",
        image: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
    Step {
        title: "Step 3: Edit and Organize",
        description:
            "You can always edit your notes later and manage tags to keep everything organized.",
        image: "https://images.pexels.com/photos/29645160/pexels-photo-29645160/free-photo-of-digital-artist-using-tablet-and-stylus-pen.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2",
    },
];

/// One step as the overlay renders it. `is_last` switches the button label
/// from "Next" to "Got it!".
#[derive(Debug, Clone, Serialize)]
pub struct StepView {
    pub index: usize,
    pub total: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub is_last: bool,
}

/// Result of pressing the overlay's button.
pub enum Advance {
    Next(StepView),
    /// Final step acknowledged. The caller clears the first-login flag and
    /// loads the dashboard — completion is all-or-nothing, no partial
    /// progress is ever stored.
    Completed,
}

/// Position in the walkthrough. Lives in `AppState` only while the overlay
/// is up.
#[derive(Debug, Default)]
pub struct Onboarding {
    step: usize,
}

impl Onboarding {
    pub fn view(&self) -> StepView {
        let step = &STEPS[self.step];
        StepView {
            index: self.step,
            total: STEPS.len(),
            title: step.title,
            description: step.description,
            image: step.image,
            is_last: self.step == STEPS.len() - 1,
        }
    }

    pub fn advance(&mut self) -> Advance {
        if self.step + 1 < STEPS.len() {
            self.step += 1;
            Advance::Next(self.view())
        } else {
            Advance::Completed
        }
    }
}
