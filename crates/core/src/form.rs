use serde::Deserialize;

use crate::commands::LedEvent;

pub const DEFAULT_GAIN: &str = "50";
pub const DEFAULT_BRIGHTNESS: &str = "0.5";

/// Query-parameter set submitted by the control panel. Every field is
/// optional: submit buttons show up only when pressed, and the slider fields
/// ride along with whichever button fired.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ControlForm {
    pub gain_local: Option<String>,
    pub gain_remote: Option<String>,
    pub gain_val: Option<String>,
    pub bright_val: Option<String>,
    pub grad_pos: Option<String>,
    pub grad_neg: Option<String>,
    pub disp_pos: Option<String>,
    pub disp_neg: Option<String>,
    pub grad_rev: Option<String>,
    pub gain_slider: Option<String>,
    pub bright_slider: Option<String>,
}

impl ControlForm {
    /// Events to dispatch for this request, checked in fixed panel order.
    /// Trigger fields are presence-only (their values are button labels);
    /// the value updates take the raw slider string, empty when the slider
    /// field is missing.
    pub fn events(&self) -> Vec<LedEvent> {
        let mut out = Vec::new();
        if self.gain_local.is_some() {
            out.push(LedEvent::GainBrightLocal);
        }
        if self.gain_remote.is_some() {
            out.push(LedEvent::GainBrightRemote);
        }
        if self.gain_val.is_some() {
            out.push(LedEvent::GainValue(
                self.gain_slider.clone().unwrap_or_default(),
            ));
        }
        if self.bright_val.is_some() {
            out.push(LedEvent::BrightValue(
                self.bright_slider.clone().unwrap_or_default(),
            ));
        }
        if self.grad_pos.is_some() {
            out.push(LedEvent::GradientPos);
        }
        if self.grad_neg.is_some() {
            out.push(LedEvent::GradientNeg);
        }
        if self.disp_pos.is_some() {
            out.push(LedEvent::DisplayChangePos);
        }
        if self.disp_neg.is_some() {
            out.push(LedEvent::DisplayChangeNeg);
        }
        if self.grad_rev.is_some() {
            out.push(LedEvent::ReverseGradientToggle);
        }
        out
    }

    /// Gain slider default for re-rendering: the just-submitted value, else 50.
    pub fn gain(&self) -> &str {
        self.gain_slider.as_deref().unwrap_or(DEFAULT_GAIN)
    }

    /// Brightness slider default for re-rendering: the just-submitted value,
    /// else 0.5.
    pub fn brightness(&self) -> &str {
        self.bright_slider.as_deref().unwrap_or(DEFAULT_BRIGHTNESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed() -> Option<String> {
        // Browsers submit the button label; only presence matters.
        Some("Update".to_string())
    }

    #[test]
    fn empty_form_dispatches_nothing() {
        assert!(ControlForm::default().events().is_empty());
    }

    #[test]
    fn sliders_alone_dispatch_nothing() {
        let form = ControlForm {
            gain_slider: Some("30".to_string()),
            bright_slider: Some("0.2".to_string()),
            ..Default::default()
        };
        assert!(form.events().is_empty());
    }

    #[test]
    fn each_trigger_maps_to_one_event() {
        let cases: Vec<(ControlForm, LedEvent)> = vec![
            (
                ControlForm { gain_local: pressed(), ..Default::default() },
                LedEvent::GainBrightLocal,
            ),
            (
                ControlForm { gain_remote: pressed(), ..Default::default() },
                LedEvent::GainBrightRemote,
            ),
            (
                ControlForm { grad_pos: pressed(), ..Default::default() },
                LedEvent::GradientPos,
            ),
            (
                ControlForm { grad_neg: pressed(), ..Default::default() },
                LedEvent::GradientNeg,
            ),
            (
                ControlForm { disp_pos: pressed(), ..Default::default() },
                LedEvent::DisplayChangePos,
            ),
            (
                ControlForm { disp_neg: pressed(), ..Default::default() },
                LedEvent::DisplayChangeNeg,
            ),
            (
                ControlForm { grad_rev: pressed(), ..Default::default() },
                LedEvent::ReverseGradientToggle,
            ),
        ];
        for (form, expected) in cases {
            assert_eq!(form.events(), vec![expected]);
        }
    }

    #[test]
    fn gain_update_carries_slider_value() {
        let form = ControlForm {
            gain_val: pressed(),
            gain_slider: Some("75".to_string()),
            ..Default::default()
        };
        assert_eq!(form.events(), vec![LedEvent::GainValue("75".to_string())]);
    }

    #[test]
    fn brightness_update_carries_slider_value() {
        let form = ControlForm {
            bright_val: pressed(),
            bright_slider: Some("0.74".to_string()),
            ..Default::default()
        };
        assert_eq!(form.events(), vec![LedEvent::BrightValue("0.74".to_string())]);
    }

    #[test]
    fn value_trigger_without_slider_sends_empty_value() {
        let form = ControlForm { gain_val: pressed(), ..Default::default() };
        assert_eq!(form.events(), vec![LedEvent::GainValue(String::new())]);
    }

    #[test]
    fn multiple_triggers_fire_in_panel_order() {
        let form = ControlForm {
            grad_rev: pressed(),
            gain_local: pressed(),
            ..Default::default()
        };
        assert_eq!(
            form.events(),
            vec![LedEvent::GainBrightLocal, LedEvent::ReverseGradientToggle]
        );
    }

    #[test]
    fn slider_defaults_reflect_submission() {
        let form = ControlForm {
            gain_slider: Some("30".to_string()),
            ..Default::default()
        };
        assert_eq!(form.gain(), "30");
        assert_eq!(form.brightness(), "0.5");

        let empty = ControlForm::default();
        assert_eq!(empty.gain(), "50");
        assert_eq!(empty.brightness(), "0.5");
    }
}
