//! AWS resources: EC2 instances and autoscaling groups.
//!
//! This module contains:
//! - The [`CloudClient`] boundary the resolver fans out over
//! - [`AwsResolver`], answering `Instance` and `AutoscalingGroup`
//! - The input schemas of [`InstanceId`] and [`AutoscalingGroupName`]
//! - The free-text query grammar

mod client;
mod query;
mod resolver;

pub use client::CloudClient;
pub use query::{parse_autoscaling_group_query, parse_instance_query, ScopedQuery};
pub use resolver::AwsResolver;

use crate::models::{AutoscalingGroupName, InstanceId};
use crate::schema::{FieldDescriptor, InputSchema, SchemaDescriptor};

/// Dynamic option source filled with every known region.
pub const REGIONS_SOURCE: &str = "regions";

/// Dynamic option source filled with every known account.
pub const ACCOUNTS_SOURCE: &str = "accounts";

fn region_field() -> FieldDescriptor {
    FieldDescriptor::options("region")
        .display_name("Region")
        .required()
        .dynamic(REGIONS_SOURCE)
        .include_all()
}

fn account_field() -> FieldDescriptor {
    FieldDescriptor::options("account")
        .display_name("Account")
        .required()
        .dynamic(ACCOUNTS_SOURCE)
        .include_all()
}

impl InputSchema for InstanceId {
    fn descriptor() -> SchemaDescriptor {
        SchemaDescriptor::new()
            .display_name("Instance ID")
            .searchable()
            .field(
                FieldDescriptor::text("id")
                    .display_name("Instance ID")
                    .required()
                    .placeholder("i-0123456789abcdef0"),
            )
            .field(region_field())
            .field(account_field())
    }
}

impl InputSchema for AutoscalingGroupName {
    fn descriptor() -> SchemaDescriptor {
        SchemaDescriptor::new()
            .display_name("Autoscaling Group Name")
            .searchable()
            .field(
                FieldDescriptor::text("name")
                    .display_name("Name")
                    .required()
                    .placeholder("my-asg-name"),
            )
            .field(region_field())
            .field(account_field())
    }
}
