use appnest_shared::counter::format_counter;
use yew::prelude::*;
use yew_hooks::prelude::use_interval;

const DURATION_MS: u32 = 2000;
const STEPS: u32 = 60;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    /// Target label such as `2.5K+` or `4.8`.
    pub value: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// Counts from zero up to `value` over two seconds.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let step = use_state(|| 0u32);

    {
        let step = step.clone();
        use_effect_with(props.value.clone(), move |_| {
            step.set(0);
            || ()
        });
    }

    {
        let step = step.clone();
        let running = *step < STEPS;
        use_interval(
            move || {
                if *step < STEPS {
                    step.set(*step + 1);
                }
            },
            if running { DURATION_MS / STEPS } else { 0 },
        );
    }

    let progress = f64::from(*step) / f64::from(STEPS);
    html! {
        <span class="tabular-nums">{ format_counter(&props.value, &props.suffix, progress) }</span>
    }
}
