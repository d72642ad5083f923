// mlserve-core/src/domain/serving/mod.rs

pub mod endpoint;
pub mod workload;

pub use endpoint::{
    ENDPOINT_SUFFIX, EndpointDescriptor, EndpointState, ServingEndpoint, endpoint_name_for,
};
pub use workload::{WorkloadShape, WorkloadSize, WorkloadType};
