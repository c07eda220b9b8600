// 📝 Form State - Raw input text, focus, and the most recent result
// Shared by every frontend; nothing here knows about terminals or HTTP

use crate::bmi::{compute, BmiResult};
use crate::tips::tips_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Weight,
    Height,
    Calculate,
}

impl Field {
    pub fn next(&self) -> Self {
        match self {
            Field::Weight => Field::Height,
            Field::Height => Field::Calculate,
            Field::Calculate => Field::Weight,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Field::Weight => Field::Calculate,
            Field::Height => Field::Weight,
            Field::Calculate => Field::Height,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Weight => "Weight (kg)",
            Field::Height => "Height (cm)",
            Field::Calculate => "Calculate BMI",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Weight => "Enter weight",
            Field::Height => "Enter height",
            Field::Calculate => "",
        }
    }
}

/// Characters a numeric input accepts
pub fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

/// One form instance. Created with the view, dropped with it.
#[derive(Debug, Clone)]
pub struct BmiForm {
    pub weight: String,
    pub height: String,
    pub focus: Field,
    result: Option<BmiResult>,
}

impl BmiForm {
    pub fn new() -> Self {
        BmiForm {
            weight: String::new(),
            height: String::new(),
            focus: Field::Weight,
            result: None,
        }
    }

    pub fn set_weight(&mut self, value: impl Into<String>) {
        self.weight = value.into();
    }

    pub fn set_height(&mut self, value: impl Into<String>) {
        self.height = value.into();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Weight => Some(&mut self.weight),
            Field::Height => Some(&mut self.height),
            Field::Calculate => None,
        }
    }

    /// Type into the focused input. Non-numeric keys and the button are ignored.
    pub fn input_char(&mut self, c: char) {
        if !is_numeric_char(c) {
            return;
        }
        if let Some(input) = self.focused_input() {
            input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input) = self.focused_input() {
            input.pop();
        }
    }

    /// Run the calculator on the current text and commit the result.
    /// Returns false (and keeps the old result) when the input doesn't parse.
    pub fn calculate(&mut self) -> bool {
        match compute(&self.weight, &self.height) {
            Some(result) => {
                tracing::info!(
                    bmi = %result.display_value(),
                    category = %result.category,
                    "BMI calculated"
                );
                self.result = Some(result);
                true
            }
            None => {
                tracing::debug!(
                    weight = %self.weight,
                    height = %self.height,
                    "Calculation skipped, input incomplete"
                );
                false
            }
        }
    }

    pub fn result(&self) -> Option<&BmiResult> {
        self.result.as_ref()
    }

    /// Tips for the current result; empty when there is none or it's normal
    pub fn recommendations(&self) -> &'static [&'static str] {
        self.result
            .map(|r| tips_for(r.category))
            .unwrap_or_default()
    }
}

impl Default for BmiForm {
    fn default() -> Self {
        Self::new()
    }
}
