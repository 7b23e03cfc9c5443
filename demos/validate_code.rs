use std::env;

use flxcode::validate_discount_code;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let (Some(domain), Some(phone), Some(code)) = (args.next(), args.next(), args.next()) else {
        eprintln!("usage: validate_code <domain> <phone> <code> [order_amount]");
        std::process::exit(2);
    };
    let order_amount = args.next().map(|raw| raw.parse::<f64>()).transpose()?.unwrap_or(0.0);

    let result = validate_discount_code(&domain, &phone, &code, order_amount);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
