use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    /// Malformed owner key or non-positive amount.
    InvalidArgument = 1,
    /// The deployer did not produce an account at the derived address.
    DeploymentFailed = 2,
    /// Escrow debit larger than the escrowed balance.
    InsufficientFunds = 3,
    NotInitialized = 4,
}
