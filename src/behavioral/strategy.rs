// 💳 Payment Strategies
// A cart delegates checkout to whichever payment method is currently set

use serde::{Deserialize, Serialize};

// ============================================================================
// PAYMENT METHODS
// ============================================================================

/// The interchangeable payment algorithms. Each is stateless; processing a
/// payment prints the method's script and hands back a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    CreditCard,
    PayPal,
    Crypto,
    BankTransfer,
}

impl PaymentMethod {
    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::Crypto => "Cryptocurrency",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }

    pub fn process(&self, amount: f64) -> PaymentReceipt {
        match self {
            PaymentMethod::CreditCard => {
                println!("   💳 Processing ${} via Credit Card", amount);
                println!("   Validating card details...");
                println!("   Payment processed successfully!");
            }
            PaymentMethod::PayPal => {
                println!("   📧 Processing ${} via PayPal", amount);
                println!("   Redirecting to PayPal...");
                println!("   Payment completed!");
            }
            PaymentMethod::Crypto => {
                println!("   ₿ Processing ${} via Cryptocurrency", amount);
                println!("   Generating wallet address...");
                println!("   Waiting for blockchain confirmation...");
                println!("   Payment confirmed on blockchain!");
            }
            PaymentMethod::BankTransfer => {
                println!("   🏦 Processing ${} via Bank Transfer", amount);
                println!("   Initiating bank transfer...");
                println!("   Transfer will complete in 1-3 business days");
            }
        }
        PaymentReceipt {
            method: *self,
            amount,
        }
    }
}

/// Record of one processed payment: which method ran and for how much.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub method: PaymentMethod,
    pub amount: f64,
}

// ============================================================================
// CART
// ============================================================================

/// Holder with exactly one active payment method at a time. Swapping is a
/// pure replacement; processing delegates synchronously to the current one.
#[derive(Debug, Clone)]
pub struct ShoppingCart {
    payment_method: PaymentMethod,
}

impl ShoppingCart {
    pub fn new() -> Self {
        ShoppingCart {
            payment_method: PaymentMethod::CreditCard,
        }
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn process_payment(&self, amount: f64) -> PaymentReceipt {
        let receipt = self.payment_method.process(amount);
        println!();
        receipt
    }
}

impl Default for ShoppingCart {
    fn default() -> Self {
        ShoppingCart::new()
    }
}

// ============================================================================
// DEMO
// ============================================================================

/// Console walkthrough: the same cart pays four times, swapping the method
/// before each payment.
pub fn run() -> anyhow::Result<()> {
    println!("   Demonstrating Strategy Pattern...");

    let mut cart = ShoppingCart::new();

    cart.set_payment_method(PaymentMethod::CreditCard);
    cart.process_payment(100.0);

    cart.set_payment_method(PaymentMethod::PayPal);
    cart.process_payment(50.0);

    cart.set_payment_method(PaymentMethod::Crypto);
    cart.process_payment(75.0);

    cart.set_payment_method(PaymentMethod::BankTransfer);
    cart.process_payment(200.0);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delegates_to_most_recent_method() {
        let mut cart = ShoppingCart::new();

        cart.set_payment_method(PaymentMethod::PayPal);
        cart.set_payment_method(PaymentMethod::Crypto);

        let receipt = cart.process_payment(75.0);
        assert_eq!(receipt.method, PaymentMethod::Crypto);
        assert_eq!(receipt.amount, 75.0);
    }

    #[test]
    fn test_default_method_is_credit_card() {
        let cart = ShoppingCart::new();
        assert_eq!(cart.payment_method(), PaymentMethod::CreditCard);

        let receipt = cart.process_payment(10.0);
        assert_eq!(receipt.method, PaymentMethod::CreditCard);
    }

    #[test]
    fn test_swap_is_pure_replacement() {
        let mut cart = ShoppingCart::new();

        cart.set_payment_method(PaymentMethod::BankTransfer);
        assert_eq!(cart.payment_method(), PaymentMethod::BankTransfer);

        cart.set_payment_method(PaymentMethod::CreditCard);
        assert_eq!(cart.payment_method(), PaymentMethod::CreditCard);
    }
}
