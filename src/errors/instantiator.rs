#[derive(thiserror::Error, Debug)]
pub enum InstantiatorErrorKind<ArgsErr, FactoryErr> {
    #[error(transparent)]
    Args(ArgsErr),
    #[error(transparent)]
    Factory(FactoryErr),
}
