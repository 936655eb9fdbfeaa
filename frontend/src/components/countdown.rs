use std::fmt;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Countdown {
    pub const fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Countdown {
            hours,
            minutes,
            seconds,
        }
    }

    /// One second later. Borrows down the units and stays at zero once there.
    pub fn tick(self) -> Self {
        if self.seconds > 0 {
            Countdown {
                seconds: self.seconds - 1,
                ..self
            }
        } else if self.minutes > 0 {
            Countdown {
                minutes: self.minutes - 1,
                seconds: 59,
                ..self
            }
        } else if self.hours > 0 {
            Countdown::new(self.hours - 1, 59, 59)
        } else {
            Countdown::new(0, 0, 0)
        }
    }

    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    pub fn parts(&self) -> [(String, &'static str); 3] {
        [
            (format!("{:02}", self.hours), "Hours"),
            (format!("{:02}", self.minutes), "Minutes"),
            (format!("{:02}", self.seconds), "Seconds"),
        ]
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownTimerProps {
    #[prop_or(config::COUNTDOWN_START)]
    pub start: Countdown,
    #[prop_or_default]
    pub style: AttrValue,
}

#[function_component(CountdownTimer)]
pub fn countdown_timer(props: &CountdownTimerProps) -> Html {
    let remaining = use_state_eq(|| props.start);

    {
        let remaining = remaining.clone();
        use_effect_with_deps(
            move |_| {
                let mut current = *remaining;
                let interval = Interval::new(1_000, move || {
                    if current.is_zero() {
                        return;
                    }
                    current = current.tick();
                    remaining.set(current);
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="countdown" style={props.style.clone()} aria-label={remaining.to_string()}>
            <div class="countdown-title">{"🚀 Limited Time Offer"}</div>
            <div class="countdown-parts">
                { for remaining.parts().into_iter().map(|(value, unit)| html! {
                    <div class="countdown-part">
                        <span class="countdown-value">{value}</span>
                        <span class="countdown-unit">{unit}</span>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mut c: Countdown, ticks: usize) -> Countdown {
        for _ in 0..ticks {
            c = c.tick();
        }
        c
    }

    #[test]
    fn borrows_a_minute_at_the_zero_second_rollover() {
        let after = run(Countdown::new(2, 15, 30), 31);
        assert_eq!(after, Countdown::new(2, 14, 59));
        assert_eq!(after.to_string(), "02:14:59");
    }

    #[test]
    fn borrows_an_hour_when_minutes_run_out() {
        assert_eq!(Countdown::new(1, 0, 0).tick(), Countdown::new(0, 59, 59));
    }

    #[test]
    fn stays_at_zero() {
        let zero = Countdown::new(0, 0, 0);
        assert_eq!(zero.tick(), zero);
        assert!(zero.tick().is_zero());
        assert_eq!(run(Countdown::new(0, 0, 2), 10).to_string(), "00:00:00");
    }

    #[test]
    fn parts_are_zero_padded() {
        let parts = Countdown::new(2, 5, 9).parts();
        assert_eq!(parts[0], ("02".to_string(), "Hours"));
        assert_eq!(parts[1].0, "05");
        assert_eq!(parts[2].0, "09");
    }

    #[test]
    fn configured_start_is_two_fifteen_thirty() {
        assert_eq!(config::COUNTDOWN_START.to_string(), "02:15:30");
    }
}
