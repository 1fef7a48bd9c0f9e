use crate::workout::{Running, SportsWalking, Swimming, Training};
use anyhow::{Result, anyhow, bail};

/// Build a workout from its sensor code and positional payload.
///
/// Codes: `RUN` (3 values), `WLK` (4 values), `SWM` (5 values). Anything
/// else is an error naming the code, as is a payload of the wrong length.
pub fn build(code: &str, data: &[f64]) -> Result<Box<dyn Training>> {
    match code {
        "SWM" => {
            let [action, duration, weight, pool_len, laps] = take(code, data)?;
            Ok(Box::new(Swimming::new(
                action, duration, weight, pool_len, laps,
            )))
        }
        "RUN" => {
            let [action, duration, weight] = take(code, data)?;
            Ok(Box::new(Running::new(action, duration, weight)))
        }
        "WLK" => {
            let [action, duration, weight, height] = take(code, data)?;
            Ok(Box::new(SportsWalking::new(action, duration, weight, height)))
        }
        other => bail!("unknown workout code: {other:?} (expected SWM, RUN or WLK)"),
    }
}

fn take<const N: usize>(code: &str, data: &[f64]) -> Result<[f64; N]> {
    <[f64; N]>::try_from(data)
        .map_err(|_| anyhow!("{code} package expects {N} values, got {}", data.len()))
}
