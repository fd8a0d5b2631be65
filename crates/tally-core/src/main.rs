use clap::{value_parser, Arg, ArgAction, Command};
use tally_core::{Checkout, CheckoutConfig};
use tally_pricing::{BaseKind, ModifierKind};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("tally")
        .version(tally_core::VERSION)
        .about("Tally checkout: order pricing and payment dispatch")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("price")
                .about("Price an order")
                .arg(
                    Arg::new("base")
                        .long("base")
                        .default_value("simple-coffee")
                        .help("Base item (simple-coffee, espresso)"),
                )
                .arg(
                    Arg::new("with")
                        .long("with")
                        .action(ArgAction::Append)
                        .help("Modifier to apply, in order (milk, sugar, whip); repeatable"),
                ),
        )
        .subcommand(
            Command::new("pay")
                .about("Process a payment")
                .arg(
                    Arg::new("method")
                        .long("method")
                        .required(true)
                        .help("Payment method (paypal, stripe, satispay)"),
                )
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .required(true)
                        .value_parser(value_parser!(f64))
                        .help("Amount to charge, must be strictly positive"),
                ),
        );

    let matches = cli.get_matches();
    let checkout = Checkout::with_defaults();

    match matches.subcommand() {
        Some(("price", sub)) => {
            let base_name = sub
                .get_one::<String>("base")
                .map(String::as_str)
                .unwrap_or(CheckoutConfig::default().default_base.name());
            let Some(base) = BaseKind::from_name(base_name) else {
                eprintln!("unknown base item: {base_name}");
                std::process::exit(1);
            };

            let mut modifiers = Vec::new();
            for name in sub
                .get_many::<String>("with")
                .unwrap_or_default()
            {
                match ModifierKind::from_name(name) {
                    Some(kind) => modifiers.push(kind),
                    None => {
                        eprintln!("unknown modifier: {name}");
                        std::process::exit(1);
                    }
                }
            }

            let summary = checkout.price_order(base, &modifiers);
            println!("Cost: {}", summary.cost);
            println!("Description: {}", summary.label);
        }
        Some(("pay", sub)) => {
            // required args, present by clap's own validation
            let method = sub.get_one::<String>("method").map(String::as_str);
            let amount = sub.get_one::<f64>("amount").copied();
            let (Some(method), Some(amount)) = (method, amount) else {
                std::process::exit(2);
            };

            match checkout.process_payment(method, amount) {
                Ok(confirmation) => println!("{confirmation}"),
                Err(err) => {
                    eprintln!("{err}");
                    std::process::exit(1);
                }
            }
        }
        _ => unreachable!("arg_required_else_help"),
    }
}
