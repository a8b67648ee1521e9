use adder::Adder;
use anyhow::{bail, Context};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (a, b) = parse_operands(std::env::args().skip(1))?;
    let result = Adder::new().sum(a, b);
    debug!(a, b, result, "computed sum");
    println!("{result}");
    Ok(())
}

/// 解析两个 i32 操作数
fn parse_operands<I, S>(args: I) -> anyhow::Result<(i32, i32)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    if args.len() != 2 {
        bail!("usage: adder <A> <B> (got {} arguments)", args.len());
    }
    let a = args[0]
        .as_ref()
        .trim()
        .parse::<i32>()
        .with_context(|| format!("invalid first operand `{}`", args[0].as_ref()))?;
    let b = args[1]
        .as_ref()
        .trim()
        .parse::<i32>()
        .with_context(|| format!("invalid second operand `{}`", args[1].as_ref()))?;
    Ok((a, b))
}
