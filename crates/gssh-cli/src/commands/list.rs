//! `gssh ls`

use std::io::Write;

use tracing::debug;

use gssh_api::requests::DescribeInstancesRequest;
use gssh_api::responses::Instance;
use gssh_api::GlobalParams;
use gssh_client::GlobalSshApi;

use super::outcome;
use crate::error::CommandError;

/// List every instance, one line each, in the order the service returns them
///
/// # Errors
/// Returns a transport, service or output error.
pub async fn run<A, W>(api: &A, params: &GlobalParams, out: &mut W) -> Result<(), CommandError>
where
    A: GlobalSshApi + ?Sized,
    W: Write,
{
    let mut request = DescribeInstancesRequest::default();
    params.bind(&mut request);

    let response = outcome(api.describe_instances(&request).await)?;
    debug!(count = response.instance_set.len(), "instances listed");

    for instance in &response.instance_set {
        writeln!(out, "{}", render(instance))?;
    }
    Ok(())
}

fn render(instance: &Instance) -> String {
    format!(
        "InstanceID:{}, AcceleratingDomain:{}, TargetIP:{}, Port:{}, Remark:{}",
        instance.instance_id,
        instance.accelerating_domain,
        instance.target_ip,
        instance.port,
        instance.remark
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fake::{Call, FakeApi, Reply};

    fn instance(id: &str, port: u32, remark: &str) -> Instance {
        Instance {
            instance_id: id.to_string(),
            accelerating_domain: format!("{id}.ipssh.net"),
            target_ip: "10.0.0.1".to_string(),
            port,
            remark: remark.to_string(),
            ..Instance::default()
        }
    }

    #[tokio::test]
    async fn test_one_line_per_instance_in_service_order() {
        let api = FakeApi::new().with_instances(vec![
            instance("uga-z", 22, "last alphabetically"),
            instance("uga-a", 2222, ""),
        ]);
        let mut out = Vec::new();

        run(&api, &GlobalParams::default(), &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "InstanceID:uga-z, AcceleratingDomain:uga-z.ipssh.net, TargetIP:10.0.0.1, Port:22, Remark:last alphabetically",
                "InstanceID:uga-a, AcceleratingDomain:uga-a.ipssh.net, TargetIP:10.0.0.1, Port:2222, Remark:",
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_list_prints_nothing() {
        let api = FakeApi::new();
        let mut out = Vec::new();

        run(&api, &GlobalParams::default(), &mut out).await.unwrap();

        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_binds_global_params() {
        let api = FakeApi::new();
        let params = GlobalParams::new(Some("cn-sh2".into()), Some("org-7".into()));

        run(&api, &params, &mut Vec::new()).await.unwrap();

        assert_eq!(
            api.calls(),
            vec![Call::Describe(DescribeInstancesRequest {
                global: params.clone()
            })]
        );
    }

    #[tokio::test]
    async fn test_service_failure_prints_no_instances() {
        let api = FakeApi::new()
            .with_instances(vec![instance("uga-1", 22, "")])
            .reply(Reply::Service(100, "Missing Action"));
        let mut out = Vec::new();

        let err = run(&api, &GlobalParams::default(), &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, CommandError::Service { code: 100, .. }));
        assert!(out.is_empty());
    }
}
