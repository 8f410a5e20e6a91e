// Domain layer: core models and ports (interfaces). Concrete HTTP and archive
// implementations live in `adapters`.

pub mod model;
pub mod ports;
