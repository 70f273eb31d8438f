// Strategy Pattern: the cart delegates payment to whichever strategy it
// currently holds, and the strategy can be swapped at runtime.

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::trace::Trace;

pub trait PaymentStrategy {
    /// Pays `amount` JPY and returns the receipt lines.
    fn pay(&self, amount: u64) -> Vec<String>;
}

pub struct CreditCardPayment {
    holder: String,
    card_number: String,
}

impl CreditCardPayment {
    pub fn new(holder: impl Into<String>, card_number: impl Into<String>) -> Self {
        Self {
            holder: holder.into(),
            card_number: card_number.into(),
        }
    }

    /// `****-****-****-` followed by the last four characters of the number.
    pub fn masked_number(&self) -> String {
        let chars: Vec<char> = self.card_number.chars().collect();
        let last_four: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        format!("****-****-****-{}", last_four)
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: u64) -> Vec<String> {
        vec![
            format!("Paid {} JPY with Credit Card.", amount),
            format!(
                "Card Holder: {}, Card Number: {}",
                self.holder,
                self.masked_number()
            ),
        ]
    }
}

pub struct PayPalPayment {
    email: String,
}

impl PayPalPayment {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: u64) -> Vec<String> {
        vec![
            format!("Paid {} JPY with PayPal.", amount),
            format!("PayPal Account: {}", self.email),
        ]
    }
}

pub struct ConvenienceStorePayment;

impl ConvenienceStorePayment {
    pub fn transaction_id() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(10)
            .map(|b| char::from(b).to_ascii_uppercase())
            .collect()
    }
}

impl PaymentStrategy for ConvenienceStorePayment {
    fn pay(&self, amount: u64) -> Vec<String> {
        vec![
            format!("Paid {} JPY at a convenience store.", amount),
            format!(
                "Transaction ID: {}. Please pay at a nearby store.",
                Self::transaction_id()
            ),
        ]
    }
}

pub struct ShoppingCart {
    strategy: Box<dyn PaymentStrategy>,
    trace: Trace,
}

impl ShoppingCart {
    pub fn new(strategy: Box<dyn PaymentStrategy>, trace: Trace) -> Self {
        Self { strategy, trace }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = strategy;
    }

    pub fn checkout(&self, amount: u64) {
        self.trace.line(format!(
            "--- Checking out with total amount: {} JPY ---",
            amount
        ));
        for line in self.strategy.pay(amount) {
            self.trace.line(line);
        }
    }
}

pub fn run_demo(trace: &Trace) {
    trace.banner("Strategy Pattern Example");

    let card = CreditCardPayment::new("Taro Yamada", "1234567890123456");
    let cart1 = ShoppingCart::new(Box::new(card), trace.clone());
    cart1.checkout(15000);

    trace.separator();

    let mut cart2 = ShoppingCart::new(
        Box::new(PayPalPayment::new("hanako@example.com")),
        trace.clone(),
    );
    cart2.checkout(8800);

    trace.separator();

    trace.line("Switching payment strategy to Convenience Store Payment...");
    cart2.set_strategy(Box::new(ConvenienceStorePayment));
    cart2.checkout(3000);
}
