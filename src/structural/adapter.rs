// 🔌 Payment Adapter
// A legacy gateway with the wrong method shape, served behind the modern contract

// ============================================================================
// TARGET CONTRACT
// ============================================================================

/// The contract modern checkout code is written against.
pub trait PaymentProcessor {
    fn process_payment(&mut self, amount: f64);
}

/// Native implementation of the contract.
#[derive(Debug, Default)]
pub struct ModernPaymentProcessor;

impl ModernPaymentProcessor {
    pub fn new() -> Self {
        ModernPaymentProcessor
    }
}

impl PaymentProcessor for ModernPaymentProcessor {
    fn process_payment(&mut self, amount: f64) {
        println!("   Processing payment of ${} via modern system", amount);
    }
}

// ============================================================================
// LEGACY SIDE
// ============================================================================

/// The old gateway. Same job, different method name; checkout code cannot
/// call it directly.
#[derive(Debug, Default)]
pub struct LegacyPaymentGateway {
    last_charged: Option<f64>,
}

impl LegacyPaymentGateway {
    pub fn new() -> Self {
        LegacyPaymentGateway { last_charged: None }
    }

    pub fn charge_amount(&mut self, amount: f64) {
        self.last_charged = Some(amount);
        println!("   Legacy system charging ${}", amount);
    }

    /// Most recent amount this gateway was asked to charge.
    pub fn last_charged(&self) -> Option<f64> {
        self.last_charged
    }
}

/// Owns the gateway and translates the modern call into the legacy one.
/// The amount passes through unmodified.
#[derive(Debug, Default)]
pub struct LegacyPaymentAdapter {
    gateway: LegacyPaymentGateway,
}

impl LegacyPaymentAdapter {
    pub fn new(gateway: LegacyPaymentGateway) -> Self {
        LegacyPaymentAdapter { gateway }
    }

    pub fn gateway(&self) -> &LegacyPaymentGateway {
        &self.gateway
    }
}

impl PaymentProcessor for LegacyPaymentAdapter {
    fn process_payment(&mut self, amount: f64) {
        self.gateway.charge_amount(amount);
    }
}

// ============================================================================
// CHECKOUT
// ============================================================================

/// Drives any processor through the shared contract.
pub fn checkout(processor: &mut dyn PaymentProcessor, amount: f64) {
    processor.process_payment(amount);
}

// ============================================================================
// DEMO
// ============================================================================

/// Console walkthrough: the modern processor handles a payment directly,
/// then the same checkout routine drives the legacy gateway via the adapter.
pub fn run() -> anyhow::Result<()> {
    println!("   Demonstrating Adapter Pattern...");

    let mut modern = ModernPaymentProcessor::new();
    modern.process_payment(100.0);

    let legacy = LegacyPaymentGateway::new();
    let mut adapter = LegacyPaymentAdapter::new(legacy);
    checkout(&mut adapter, 50.0);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_forwarded_unmodified() {
        let mut adapter = LegacyPaymentAdapter::new(LegacyPaymentGateway::new());

        adapter.process_payment(123.45);
        assert_eq!(adapter.gateway().last_charged(), Some(123.45));
    }

    #[test]
    fn test_checkout_accepts_either_processor() {
        let mut modern = ModernPaymentProcessor::new();
        checkout(&mut modern, 50.0);

        let mut adapter = LegacyPaymentAdapter::new(LegacyPaymentGateway::new());
        checkout(&mut adapter, 50.0);
        assert_eq!(adapter.gateway().last_charged(), Some(50.0));
    }

    #[test]
    fn test_fresh_gateway_has_no_charges() {
        let gateway = LegacyPaymentGateway::new();
        assert_eq!(gateway.last_charged(), None);
    }
}
