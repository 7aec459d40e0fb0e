//! The "Kubernetes Networking" module.

use nonempty::NonEmpty;

use super::{code, diagram, minutes, slug, text};
use crate::domain::{Lesson, Level, Module, Resource, ResourceKind};

pub(super) fn module() -> Module {
    let lessons = NonEmpty::from((
        networking_fundamentals(),
        vec![services(), ingress(), network_policies(), dns(), cni()],
    ));

    Module::new(
        slug("networking"),
        "Kubernetes Networking",
        "Learn about networking concepts and implementations in Kubernetes",
        Level::Intermediate,
        vec![
            "Understand the Kubernetes network model and its flat-address-space guarantees"
                .to_string(),
            "Expose workloads with Services of different types".to_string(),
            "Route external HTTP traffic with Ingress resources and controllers".to_string(),
            "Explain how DNS-based service discovery works inside a cluster".to_string(),
            "Restrict traffic between Pods with NetworkPolicies".to_string(),
            "Describe the role of CNI plugins in Pod networking".to_string(),
        ],
        lessons,
    )
    .with_resources(vec![
        Resource::new(
            "Cluster Networking",
            "https://kubernetes.io/docs/concepts/cluster-administration/networking/",
            ResourceKind::Documentation,
            "Official Kubernetes documentation on cluster networking.",
        ),
        Resource::new(
            "CNI Specification",
            "https://github.com/containernetworking/cni",
            ResourceKind::Github,
            "Official specification for the Container Network Interface (CNI).",
        ),
    ])
}

fn networking_fundamentals() -> Lesson {
    Lesson::new(
        slug("networking-fundamentals"),
        "Kubernetes Networking Fundamentals",
        minutes(25),
        vec![
            text(
                "<h2>The Kubernetes Network Model</h2><p>Kubernetes imposes a simple, flat \
                 model: every Pod gets its own IP address, all Pods can reach all other Pods \
                 without NAT, and agents on a node can reach all Pods on that node. \
                 Everything else, Services, Ingress, NetworkPolicies, builds on this \
                 foundation.</p>",
            ),
            diagram("k8s-networking"),
            text(
                "<p>Four distinct networking problems are solved separately: \
                 container-to-container (via localhost inside a Pod), Pod-to-Pod, \
                 Pod-to-Service, and external-to-Service traffic.</p>",
            ),
        ],
    )
}

fn services() -> Lesson {
    Lesson::new(
        slug("services"),
        "Kubernetes Services",
        minutes(20),
        vec![
            text(
                "<h2>Services</h2><p>Pods are ephemeral, so their IPs cannot be relied on. A \
                 Service gives a stable virtual IP and DNS name to a set of Pods selected by \
                 labels.</p><ul><li><strong>ClusterIP</strong>: internal-only virtual IP (the \
                 default).</li><li><strong>NodePort</strong>: exposes the Service on a static \
                 port of every node.</li><li><strong>LoadBalancer</strong>: provisions an \
                 external load balancer from the cloud provider.</li><li><strong>\
                 ExternalName</strong>: maps the Service to a DNS name outside the \
                 cluster.</li></ul>",
            ),
            code(
                "apiVersion: v1\nkind: Service\nmetadata:\n  name: web\nspec:\n  selector:\n    \
app: nginx\n  ports:\n    - port: 80\n      targetPort: 8080\n  type: ClusterIP",
            ),
        ],
    )
    .with_resources(vec![Resource::new(
        "Service",
        "https://kubernetes.io/docs/concepts/services-networking/service/",
        ResourceKind::Documentation,
        "Official documentation on Kubernetes Services.",
    )])
}

fn ingress() -> Lesson {
    Lesson::new(
        slug("ingress"),
        "Ingress and Ingress Controllers",
        minutes(18),
        vec![
            text(
                "<h2>Ingress</h2><p>An Ingress routes external HTTP and HTTPS traffic to \
                 Services based on host names and paths, and can terminate TLS. The resource \
                 itself is inert: an <em>ingress controller</em> (nginx, Traefik, HAProxy, a \
                 cloud controller) must be running in the cluster to act on it.</p>",
            ),
            diagram("k8s-networking"),
        ],
    )
}

fn network_policies() -> Lesson {
    Lesson::new(
        slug("network-policies"),
        "Network Policies",
        minutes(15),
        vec![
            text(
                "<h2>Network Policies</h2><p>By default all Pods accept traffic from all \
                 sources. A NetworkPolicy selects Pods and declares which ingress and egress \
                 traffic is allowed; once any policy selects a Pod, everything not explicitly \
                 allowed is denied. Enforcement is delegated to the CNI plugin, and not every \
                 plugin supports policies.</p>",
            ),
            code(
                "apiVersion: networking.k8s.io/v1\nkind: NetworkPolicy\nmetadata:\n  name: \
allow-frontend\nspec:\n  podSelector:\n    matchLabels:\n      app: backend\n  ingress:\n    - \
from:\n        - podSelector:\n            matchLabels:\n              app: frontend",
            ),
        ],
    )
}

fn dns() -> Lesson {
    Lesson::new(
        slug("dns"),
        "DNS in Kubernetes",
        minutes(15),
        vec![
            text(
                "<h2>DNS-based Service Discovery</h2><p>Every cluster runs a DNS server \
                 (CoreDNS) as an addon. Services get records of the form \
                 <code>&lt;service&gt;.&lt;namespace&gt;.svc.cluster.local</code>, so \
                 applications can find each other by name without any client-side \
                 registry.</p>",
            ),
            code(
                "# Resolve a service from inside a Pod\n$ nslookup web.default.svc.cluster.local\
\n\n# Inspect the CoreDNS configuration\n$ kubectl -n kube-system get configmap coredns -o yaml",
            ),
        ],
    )
    .with_resources(vec![Resource::new(
        "DNS for Services and Pods",
        "https://kubernetes.io/docs/concepts/services-networking/dns-pod-service/",
        ResourceKind::Documentation,
        "Official documentation on DNS for service discovery in Kubernetes.",
    )])
}

fn cni() -> Lesson {
    Lesson::new(
        slug("cni"),
        "Container Network Interface (CNI)",
        minutes(15),
        vec![text(
            "<h2>CNI</h2><p>The Container Network Interface is the contract between the \
             kubelet and the plugin that wires a Pod into the network. When a Pod is created \
             the runtime invokes the configured CNI plugin, which allocates the Pod IP and \
             sets up routes. Calico, Cilium, and Flannel are common implementations, \
             differing in data path, policy support, and observability.</p>",
        )],
    )
}
