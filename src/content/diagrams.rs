//! The hand-authored diagram registry.
//!
//! Step bodies are plain-text renderable payloads; the catalog treats them
//! as opaque strings and only the rendering layer interprets them.

use nonempty::{NonEmpty, nonempty};

use super::slug;
use crate::domain::{Diagram, Registry, Step};

pub(super) fn registry() -> Registry {
    let mut registry = Registry::new();
    registry.insert(slug("k8s-architecture"), k8s_architecture());
    registry.insert(slug("k8s-components"), k8s_components());
    registry.insert(slug("pod-lifecycle"), pod_lifecycle());
    registry.insert(slug("k8s-networking"), k8s_networking());
    registry
}

fn k8s_architecture() -> Diagram {
    Diagram::new(
        "Kubernetes Architecture",
        nonempty![Step::new(
            "Control plane and worker nodes",
            "+--------------------- Control Plane ----------------------+\n\
             | API Server | Scheduler | Controller Manager | etcd      |\n\
             +----------------------------------------------------------+\n\
                    |                    |\n\
             +------+-------+     +------+-------+\n\
             |   Node 1     |     |   Node 2     |\n\
             | kubelet      |     | kubelet      |\n\
             | kube-proxy   |     | kube-proxy   |\n\
             | runtime      |     | runtime      |\n\
             +--------------+     +--------------+",
        )],
    )
}

fn k8s_components() -> Diagram {
    Diagram::new(
        "Kubernetes Components",
        nonempty![Step::new(
            "Control plane and node components side by side",
            "Control plane: kube-apiserver (API frontend), etcd (cluster state), \
             kube-scheduler (assigns Pods to nodes), kube-controller-manager (runs \
             controller loops).\n\
             Node: kubelet (runs Pods), kube-proxy (Service networking), container runtime \
             (containerd / CRI-O).",
        )],
    )
}

fn pod_lifecycle() -> Diagram {
    Diagram::new(
        "Pod Lifecycle",
        NonEmpty::from((
            Step::new(
                "Phases",
                "Pending --> Running --> Succeeded\n\
                                    \\-> Failed\n\
                 Pending: accepted, containers not yet created.\n\
                 Running: bound to a node, all containers created.",
            ),
            vec![Step::new(
                "Probes and restarts",
                "Liveness probe fails -> container restarted (per restartPolicy).\n\
                 Readiness probe fails -> Pod removed from Service endpoints.\n\
                 Node lost -> Pod rescheduled by its controller onto another node.",
            )],
        )),
    )
}

fn k8s_networking() -> Diagram {
    Diagram::new(
        "Kubernetes Networking",
        NonEmpty::from((
            Step::new(
                "Pod-to-Pod",
                "Every Pod gets a routable IP. Pod A (10.1.0.4) reaches Pod B (10.1.1.7) \
                 directly, across nodes, with no NAT in between.",
            ),
            vec![Step::new(
                "Service and Ingress",
                "client --> Ingress (host/path routing) --> Service (stable virtual IP) --> \
                 Pods selected by label.\n\
                 kube-proxy programs each node to translate the Service IP to a healthy \
                 backend Pod.",
            )],
        )),
    )
}
