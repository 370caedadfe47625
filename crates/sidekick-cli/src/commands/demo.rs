//! `demo`: run every utility once with fixed sample inputs.

use std::io::Write;

use sidekick_core::{decrypt, encrypt_with_params, format_now, get_or, random_token};
use sidekick_core::{Clock, EnvSource, KdfParams};

use crate::app::AppContext;

const DEMO_ENV_NAME: &str = "EXAMPLE_ENV";
const DEMO_ENV_DEFAULT: &str = "defaultValue";
const DEMO_TOKEN_LENGTH: usize = 10;
const DEMO_PASSPHRASE: &str = "yourSecretKey";
const DEMO_PLAINTEXT: &str = "Hello, World!";

pub fn handle_demo(ctx: &AppContext) -> anyhow::Result<()> {
    let params = ctx.config()?.cipher.kdf_params();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_demo(&mut out, ctx.clock(), ctx.env(), &params)
}

fn run_demo<W: Write>(
    out: &mut W,
    clock: &dyn Clock,
    env: &dyn EnvSource,
    params: &KdfParams,
) -> anyhow::Result<()> {
    writeln!(out, "Current Date: {}", format_now(clock))?;
    writeln!(
        out,
        "Example Env: {}",
        get_or(env, DEMO_ENV_NAME, DEMO_ENV_DEFAULT)
    )?;
    writeln!(out, "Random String: {}", random_token(DEMO_TOKEN_LENGTH)?)?;

    let encrypted = encrypt_with_params(DEMO_PLAINTEXT, DEMO_PASSPHRASE, params)?;
    let decrypted = decrypt(&encrypted, DEMO_PASSPHRASE)?;

    writeln!(out, "Original Text: {}", DEMO_PLAINTEXT)?;
    writeln!(out, "Encrypted Text: {}", encrypted)?;
    writeln!(out, "Decrypted Text: {}", decrypted)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sidekick_core::{FixedClock, MapEnv};

    fn demo_output(env: &MapEnv) -> Vec<String> {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        let mut out = Vec::new();
        run_demo(&mut out, &clock, env, &KdfParams::new(1024, 1, 1)).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_demo_lines() {
        let lines = demo_output(&MapEnv::new());
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Current Date: 2024-05-01T12:00:00.000Z");
        assert_eq!(lines[1], "Example Env: defaultValue");
        let token = lines[2].strip_prefix("Random String: ").unwrap();
        assert_eq!(token.len(), 10);
        assert_eq!(lines[3], "Original Text: Hello, World!");
        assert!(lines[4].starts_with("Encrypted Text: "));
        assert_eq!(lines[5], "Decrypted Text: Hello, World!");
    }

    #[test]
    fn test_demo_reads_example_env() {
        let lines = demo_output(&MapEnv::from([("EXAMPLE_ENV", "from-env")]));
        assert_eq!(lines[1], "Example Env: from-env");
    }
}
