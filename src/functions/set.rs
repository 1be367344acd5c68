use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Value, json};

use crate::animation::{ColorTween, GradientTween, NumberTween, Transition, ValueAnimation};
use crate::color::AdvancedColor;
use crate::foundation::core::ItemId;
use crate::functions::args::{ArgSpec, ArgType, FunctionArgs, FunctionDescriptor};
use crate::functions::{ExecCtx, ResultCallback};
use crate::scheme::PropertyType;

const DEFAULT_DURATION_SECS: f64 = 0.5;

pub(crate) fn descriptor() -> FunctionDescriptor {
    let transitions: Vec<&'static str> = Transition::ALL.iter().map(|t| t.as_str()).collect();
    FunctionDescriptor {
        name: "Set",
        args: vec![
            ("field", ArgSpec::new("Field", ArgType::Text, json!(""))),
            ("value", ArgSpec::new("Value", ArgType::Object, Value::Null)),
            (
                "animated",
                ArgSpec::new("Animated", ArgType::Boolean, json!(false)),
            ),
            (
                "animationDuration",
                ArgSpec::new(
                    "Animation duration (sec)",
                    ArgType::Number,
                    json!(DEFAULT_DURATION_SECS),
                )
                .depends_on("animated", true),
            ),
            (
                "transition",
                ArgSpec::new(
                    "Transition",
                    ArgType::Choice,
                    json!(Transition::default().as_str()),
                )
                .with_options(&transitions)
                .depends_on("animated", true),
            ),
            (
                "inBackground",
                ArgSpec::new("In Background", ArgType::Boolean, json!(false))
                    .depends_on("animated", true)
                    .with_description(
                        "Play animation in background without blocking invocation of other actions",
                    ),
            ),
        ],
    }
}

// `field` and `value` are strict. Optional arguments that fail to decode use their defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetArgs {
    field: String,
    value: Value,
    #[serde(default, deserialize_with = "or_default")]
    animated: bool,
    #[serde(default = "default_duration", deserialize_with = "duration_or_default")]
    animation_duration: f64,
    #[serde(default, deserialize_with = "or_default")]
    transition: Transition,
    #[serde(default, deserialize_with = "or_default")]
    in_background: bool,
}

fn default_duration() -> f64 {
    DEFAULT_DURATION_SECS
}

fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(T::deserialize(raw).unwrap_or_default())
}

fn duration_or_default<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(raw.as_f64().unwrap_or(DEFAULT_DURATION_SECS))
}

/// Produces the property value for eased progress `t`.
type Frame = Box<dyn FnMut(f64) -> Value>;

struct Plan {
    // Written once at submission, before any frame.
    initial: Option<Value>,
    frame: Frame,
}

/// Assign `args.value` to `args.field` of the item, optionally animated.
#[tracing::instrument(skip_all, fields(item = item.map(ItemId::as_str)))]
pub(crate) fn execute(
    item: Option<&ItemId>,
    args: &FunctionArgs,
    ctx: &mut ExecCtx<'_>,
    done: ResultCallback,
) {
    let Some(item_id) = item else {
        tracing::debug!("no item, skipping");
        done();
        return;
    };
    if !args.contains("field") || !args.contains("value") {
        tracing::debug!("missing field or value, skipping");
        done();
        return;
    }
    let args: SetArgs = match args.decode() {
        Ok(args) => args,
        Err(err) => {
            tracing::warn!(%err, "malformed field or value, skipping");
            done();
            return;
        }
    };
    if !ctx.container.contains(item_id) {
        tracing::warn!("item not found, skipping");
        done();
        return;
    }

    if !args.animated {
        snap(item_id, &args.field, args.value, ctx);
        done();
        return;
    }

    let done: ResultCallback = if args.in_background {
        done();
        Box::new(|| {})
    } else {
        done
    };
    animate(item_id, args, ctx, done);
}

fn snap(item_id: &ItemId, field: &str, value: Value, ctx: &mut ExecCtx<'_>) {
    let Some(item) = ctx.container.item_mut(item_id) else {
        return;
    };
    if item.set_property(field, value) {
        ctx.events.emit_item_changed(item_id);
    } else {
        tracing::debug!(field, "property path not writable");
    }
}

fn animate(item_id: &ItemId, args: SetArgs, ctx: &mut ExecCtx<'_>, done: ResultCallback) {
    let Some(item) = ctx.container.item(item_id) else {
        done();
        return;
    };
    let Some(property) = ctx.shapes.property(&item.shape, &args.field) else {
        tracing::debug!(shape = %item.shape, field = %args.field, "unknown property, skipping");
        done();
        return;
    };
    let start = item.get_property(&args.field);

    let plan = match property.kind {
        PropertyType::Number => number_plan(start, &args.value),
        PropertyType::Color => color_plan(start, &args.value),
        PropertyType::AdvancedColor => advanced_color_plan(start, &args.value),
        _ => None,
    };

    let Some(plan) = plan else {
        tracing::debug!(field = %args.field, "value not animatable, assigning directly");
        snap(item_id, &args.field, args.value, ctx);
        done();
        return;
    };

    if let Some(initial) = plan.initial {
        if let Some(item) = ctx.container.item_mut(item_id) {
            item.set_property(&args.field, initial);
        }
    }

    let mut frame = plan.frame;
    let target = item_id.clone();
    let field = args.field;
    let animation = ValueAnimation::new(
        args.animation_duration * 1000.0,
        args.transition,
        move |t, fctx| {
            let value = frame(t);
            if let Some(item) = fctx.container.item_mut(&target) {
                item.set_property(&field, value);
                fctx.events.emit_item_changed(&target);
            }
        },
    )
    .on_destroy(move |_| done());

    ctx.animations.play(animation, item_id.clone());
}

fn number_plan(start: Option<&Value>, end: &Value) -> Option<Plan> {
    let tween = NumberTween {
        start: start?.as_f64()?,
        end: end.as_f64()?,
    };
    Some(Plan {
        initial: None,
        frame: Box::new(move |t| Value::from(tween.at(t))),
    })
}

fn color_plan(start: Option<&Value>, end: &Value) -> Option<Plan> {
    let tween = ColorTween::parse(start?.as_str()?, end.as_str()?)?;
    Some(Plan {
        initial: None,
        frame: Box::new(move |t| Value::String(tween.at(t))),
    })
}

fn advanced_color_plan(start: Option<&Value>, end: &Value) -> Option<Plan> {
    let start = AdvancedColor::from_value(start?)?;
    let end = AdvancedColor::from_value(end)?;

    match (start, end) {
        (AdvancedColor::Solid { color: a }, AdvancedColor::Solid { color: b }) => {
            let tween = ColorTween::parse(&a, &b)?;
            Some(Plan {
                initial: None,
                frame: Box::new(move |t| {
                    AdvancedColor::Solid {
                        color: tween.at(t),
                    }
                    .to_value()
                }),
            })
        }
        (AdvancedColor::Gradient { gradient: a }, AdvancedColor::Gradient { gradient: b }) => {
            let tween = GradientTween::new(&a, &b)?;
            let mut current = tween.initial();
            let initial = AdvancedColor::Gradient {
                gradient: current.clone(),
            }
            .to_value();
            Some(Plan {
                initial: Some(initial),
                frame: Box::new(move |t| {
                    tween.apply(&mut current, t);
                    AdvancedColor::Gradient {
                        gradient: current.clone(),
                    }
                    .to_value()
                }),
            })
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/functions/set.rs"]
mod tests;
