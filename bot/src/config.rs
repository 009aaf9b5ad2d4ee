use anyhow::{anyhow, bail, Context, Result};
use rust_decimal::Decimal;
use std::env;
use std::fmt::Display;
use std::io::{self, Write};
use std::str::FromStr;
use std::time::Duration;
use t2::schema::{Emoji, Region, TrafficType, Uom};

const AUTH_CODE_VAR: &str = "T2_AUTH_CODE";
const MAX_EMOJIS: usize = 8;
const DEFAULT_TOP_WINDOW: usize = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Task {
    Boost,
    Create,
    All,
}

impl FromStr for Task {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "boost" => Ok(Task::Boost),
            "create" => Ok(Task::Create),
            "all" => Ok(Task::All),
            other => bail!("expected boost, create or all, got {other:?}"),
        }
    }
}

/// Immutable run configuration, read once from the environment at
/// startup.
pub(crate) struct Config {
    pub auth_code: String,
    pub number: String,
    pub region: Region,
    pub task: Task,
    pub traffic_type: TrafficType,
    pub uom: Uom,
    pub volume: u32,
    pub cost: Option<Decimal>,
    pub boost_balance: i64,
    pub orders_count: u32,
    pub poll_interval: Duration,
    pub top_window: usize,
    pub emojis: Vec<Emoji>,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self> {
        let task: Task = parsed_or("T2_TASK", Task::All)?;

        // only the tasks that use a knob force it to be set
        let boost_balance = match task {
            Task::Create => parsed_or("T2_BOOST_BALANCE", 0)?,
            _ => parsed("T2_BOOST_BALANCE")?,
        };
        let orders_count = match task {
            Task::Boost => parsed_or("T2_ORDERS_COUNT", 0)?,
            _ => parsed("T2_ORDERS_COUNT")?,
        };

        let volume: u32 = parsed("T2_VOLUME")?;
        if volume == 0 {
            bail!("T2_VOLUME must be positive");
        }

        Ok(Self {
            auth_code: auth_code()?,
            number: required("T2_NUMBER")?,
            region: parsed_or("T2_REGION", Region::Ekt)?,
            task,
            traffic_type: parsed("T2_TRAFFIC_TYPE")?,
            uom: parsed("T2_UOM")?,
            volume,
            cost: optional("T2_COST")?,
            boost_balance,
            orders_count,
            poll_interval: Duration::from_secs(parsed("T2_POLL_SECS")?),
            top_window: parsed_or("T2_TOP_WINDOW", DEFAULT_TOP_WINDOW)?,
            emojis: emojis()?,
        })
    }
}

/// The bearer credential comes from the environment when present,
/// otherwise from an interactive prompt.
fn auth_code() -> Result<String> {
    if let Ok(code) = env::var(AUTH_CODE_VAR) {
        return Ok(code);
    }

    print!("Authorization code: ");
    io::stdout().flush()?;
    let mut code = String::new();
    io::stdin().read_line(&mut code)?;

    let code = code.trim();
    if code.is_empty() {
        bail!("no authorization code given");
    }
    Ok(code.to_string())
}

fn emojis() -> Result<Vec<Emoji>> {
    let Ok(raw) = env::var("T2_EMOJIS") else {
        return Ok(Vec::new());
    };

    let emojis = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse()
                .map_err(|e| anyhow!("invalid emoji {part:?} in T2_EMOJIS: {e}"))
        })
        .collect::<Result<Vec<Emoji>>>()?;

    if emojis.len() > MAX_EMOJIS {
        bail!("a lot carries at most {MAX_EMOJIS} emojis, got {}", emojis.len());
    }
    Ok(emojis)
}

fn required(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{name} is not set"))
}

fn parsed<T>(name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = required(name)?;
    raw.parse()
        .map_err(|e| anyhow!("invalid {name} {raw:?}: {e}"))
}

fn parsed_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow!("invalid {name} {raw:?}: {e}")),
        Err(_) => Ok(default),
    }
}

fn optional<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e| anyhow!("invalid {name} {raw:?}: {e}")),
        Err(_) => Ok(None),
    }
}
