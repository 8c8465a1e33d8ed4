//! The five text inputs shown above the drawing.
//!
//! Values are kept as raw text. Nothing is parsed here; the session parses
//! leniently on every render, exactly like reading a form.

use rosette::SpiralInputs;

/// One labelled text field.
#[derive(Debug, Clone, PartialEq)]
pub struct InputField {
    pub label: &'static str,
    pub value: String,
}

/// The form with a focused field.
#[derive(Debug, Clone)]
pub struct InputForm {
    fields: [InputField; 5],
    focus: usize,
}

impl InputForm {
    pub fn from_inputs(inputs: &SpiralInputs) -> Self {
        let field = |label, value: &String| InputField {
            label,
            value: value.clone(),
        };
        Self {
            fields: [
                field("Angle", &inputs.angle),
                field("Step", &inputs.initial_step),
                field("Increment", &inputs.step_increment),
                field("Segments", &inputs.segments),
                field("Repeats", &inputs.repeats),
            ],
            focus: 0,
        }
    }

    /// Current values as session inputs.
    pub fn to_inputs(&self) -> SpiralInputs {
        let [angle, step, increment, segments, repeats] = &self.fields;
        SpiralInputs {
            angle: angle.value.clone(),
            initial_step: step.value.clone(),
            step_increment: increment.value.clone(),
            segments: segments.value.clone(),
            repeats: repeats.value.clone(),
        }
    }

    pub fn fields(&self) -> &[InputField] {
        &self.fields
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    pub fn insert(&mut self, c: char) {
        self.fields[self.focus].value.push(c);
    }

    pub fn backspace(&mut self) {
        self.fields[self.focus].value.pop();
    }
}
