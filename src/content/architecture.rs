//! The "Kubernetes Architecture" module.

use nonempty::NonEmpty;

use super::{code, diagram, minutes, slug, text};
use crate::domain::{Lesson, Level, Module, Resource, ResourceKind};

pub(super) fn module() -> Module {
    let lessons = NonEmpty::from((
        overview(),
        vec![
            control_plane(),
            worker_nodes(),
            kubernetes_objects(),
            api_server(),
            communication(),
            storage_architecture(),
        ],
    ));

    Module::new(
        slug("architecture"),
        "Kubernetes Architecture",
        "Understand the components and architecture of Kubernetes in depth",
        Level::Beginner,
        vec![
            "Describe the control plane and node components and their responsibilities"
                .to_string(),
            "Explain how the API server mediates all cluster communication".to_string(),
            "Understand Kubernetes objects and the declarative desired-state model".to_string(),
            "Follow the path of a request from kubectl to a running container".to_string(),
            "Understand how persistent storage is provisioned and attached".to_string(),
        ],
        lessons,
    )
    .with_resources(vec![
        Resource::new(
            "Kubernetes Components",
            "https://kubernetes.io/docs/concepts/overview/components/",
            ResourceKind::Documentation,
            "Official Kubernetes documentation on the components that make up a cluster.",
        ),
        Resource::new(
            "Kubernetes in Action",
            "https://www.manning.com/books/kubernetes-in-action",
            ResourceKind::Book,
            "Book by Marko Lukša with a thorough treatment of Kubernetes internals.",
        ),
        Resource::new(
            "etcd Documentation",
            "https://etcd.io/docs/",
            ResourceKind::Documentation,
            "Documentation for etcd, the key-value store backing the cluster state.",
        ),
    ])
}

fn overview() -> Lesson {
    Lesson::new(
        slug("overview"),
        "Architecture Overview",
        minutes(20),
        vec![
            text(
                "<h2>Architecture Overview</h2><p>A Kubernetes cluster is split into two \
                 planes. The control plane makes global decisions (scheduling, detecting and \
                 responding to cluster events), while worker nodes host the Pods that run \
                 application workloads. All state flows through the API server and is \
                 persisted in etcd.</p>",
            ),
            diagram("k8s-architecture"),
            text(
                "<p>Every interaction with the cluster, whether from <code>kubectl</code>, a \
                 controller, or the kubelet on a node, goes through the API server. No \
                 component talks to etcd directly except the API server itself.</p>",
            ),
        ],
    )
}

fn control_plane() -> Lesson {
    Lesson::new(
        slug("control-plane"),
        "Control Plane Components",
        minutes(18),
        vec![
            text(
                "<h2>Control Plane Components</h2><ul><li><strong>kube-apiserver</strong>: \
                 exposes the Kubernetes API, validates and processes requests, and is the \
                 frontend for the control plane.</li><li><strong>etcd</strong>: a consistent, \
                 highly available key-value store holding all cluster data.</li><li><strong>\
                 kube-scheduler</strong>: watches for newly created Pods with no assigned node \
                 and selects one for them, balancing resource requirements and \
                 constraints.</li><li><strong>kube-controller-manager</strong>: runs the \
                 controller loops that drive the actual state towards the desired \
                 state.</li></ul>",
            ),
            diagram("k8s-components"),
        ],
    )
}

fn worker_nodes() -> Lesson {
    Lesson::new(
        slug("worker-nodes"),
        "Worker Node Components",
        minutes(15),
        vec![
            text(
                "<h2>Worker Node Components</h2><ul><li><strong>kubelet</strong>: the agent on \
                 each node; it ensures the containers described in PodSpecs are running and \
                 healthy.</li><li><strong>kube-proxy</strong>: maintains network rules on the \
                 node so that traffic reaches the right Pods, implementing the Service \
                 abstraction.</li><li><strong>container runtime</strong>: the software that \
                 actually runs containers (containerd, CRI-O), driven through the CRI \
                 specification.</li></ul>",
            ),
            diagram("pod-lifecycle"),
            text(
                "<p>A Pod moves through the phases <em>Pending</em>, <em>Running</em>, and \
                 finally <em>Succeeded</em> or <em>Failed</em>; the kubelet reports the phase \
                 transitions back to the API server.</p>",
            ),
        ],
    )
}

fn kubernetes_objects() -> Lesson {
    Lesson::new(
        slug("kubernetes-objects"),
        "Kubernetes Objects",
        minutes(15),
        vec![
            text(
                "<h2>Kubernetes Objects</h2><p>Objects are persistent records of intent: once \
                 created, Kubernetes continuously works to keep the cluster in the state the \
                 object describes. Common objects include Pods, Deployments, Services, \
                 ConfigMaps, and Namespaces. Each object has a <code>spec</code> (desired \
                 state) and a <code>status</code> (observed state).</p>",
            ),
            code(
                "apiVersion: apps/v1\nkind: Deployment\nmetadata:\n  name: nginx-deployment\n\
spec:\n  replicas: 3\n  selector:\n    matchLabels:\n      app: nginx\n  template:\n    \
metadata:\n      labels:\n        app: nginx\n    spec:\n      containers:\n        - name: \
nginx\n          image: nginx:1.25\n          ports:\n            - containerPort: 80",
            ),
        ],
    )
}

fn api_server() -> Lesson {
    Lesson::new(
        slug("api-server"),
        "Kubernetes API Server",
        minutes(12),
        vec![
            text(
                "<h2>The API Server</h2><p>The API server is the only component that reads \
                 from and writes to etcd. Every request passes through authentication, \
                 authorization, and admission control before the object is validated and \
                 persisted. Clients can watch resources for changes, which is how controllers \
                 and the scheduler react to new state.</p>",
            ),
            code(
                "# Inspect the API server's view of the cluster\n$ kubectl get --raw /api/v1/\
namespaces/default/pods | jq '.items | length'\n\n# Watch deployments for changes\n$ kubectl \
get deployments --watch",
            ),
        ],
    )
    .with_resources(vec![Resource::new(
        "Kubernetes API Concepts",
        "https://kubernetes.io/docs/reference/using-api/api-concepts/",
        ResourceKind::Documentation,
        "Reference documentation for the Kubernetes API server.",
    )])
}

fn communication() -> Lesson {
    Lesson::new(
        slug("communication"),
        "Component Communication",
        minutes(12),
        vec![text(
            "<h2>Component Communication</h2><p>Communication follows a hub-and-spoke \
             pattern centred on the API server. Nodes initiate connections to the control \
             plane, never the other way around, which keeps clusters workable behind NAT and \
             firewalls. The scheduler and controllers use watches rather than polling, so \
             state changes propagate within milliseconds.</p>",
        )],
    )
}

fn storage_architecture() -> Lesson {
    Lesson::new(
        slug("storage-architecture"),
        "Storage Architecture",
        minutes(15),
        vec![
            text(
                "<h2>Storage Architecture</h2><p>Kubernetes separates the request for storage \
                 from its provisioning. A Pod references a <em>PersistentVolumeClaim</em>; the \
                 claim is bound to a <em>PersistentVolume</em>, either pre-provisioned by an \
                 administrator or created on demand by a <em>StorageClass</em> through a CSI \
                 driver.</p>",
            ),
            code(
                "apiVersion: v1\nkind: PersistentVolumeClaim\nmetadata:\n  name: data\nspec:\n  \
accessModes:\n    - ReadWriteOnce\n  storageClassName: standard\n  resources:\n    requests:\n      \
storage: 10Gi",
            ),
        ],
    )
    .with_resources(vec![Resource::new(
        "Persistent Volumes",
        "https://kubernetes.io/docs/concepts/storage/persistent-volumes/",
        ResourceKind::Documentation,
        "Official documentation on storage concepts in Kubernetes.",
    )])
}
