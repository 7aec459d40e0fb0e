//! The "Introduction to Kubernetes" module.

use nonempty::NonEmpty;

use super::{code, diagram, minutes, slug, text};
use crate::domain::{Lesson, Level, Module, Resource, ResourceKind};

pub(super) fn module() -> Module {
    let lessons = NonEmpty::from((
        what_is_kubernetes(),
        vec![
            kubernetes_history(),
            kubernetes_use_cases(),
            kubernetes_benefits(),
            quick_start(),
            kubernetes_components(),
        ],
    ));

    Module::new(
        slug("introduction"),
        "Introduction to Kubernetes",
        "Learn the fundamentals of Kubernetes, its history, architecture, and real-world \
         applications",
        Level::Beginner,
        vec![
            "Understand what Kubernetes is and the problems it solves in modern application \
             deployment"
                .to_string(),
            "Learn about the history and evolution of Kubernetes from Borg to CNCF".to_string(),
            "Explore common use cases and implementation patterns for Kubernetes in production"
                .to_string(),
            "Understand the benefits, challenges, and limitations of Kubernetes adoption"
                .to_string(),
            "Set up a basic Kubernetes environment using Minikube and kubectl".to_string(),
            "Learn essential Kubernetes terminology and concepts".to_string(),
        ],
        lessons,
    )
    .with_resources(vec![
        Resource::new(
            "Kubernetes Documentation",
            "https://kubernetes.io/docs/home/",
            ResourceKind::Documentation,
            "Official Kubernetes documentation covering all aspects of the platform.",
        ),
        Resource::new(
            "Kubernetes: Up and Running",
            "https://www.oreilly.com/library/view/kubernetes-up-and/9781492046523/",
            ResourceKind::Book,
            "Comprehensive book by Kelsey Hightower, Brendan Burns, and Joe Beda, covering \
             Kubernetes fundamentals.",
        ),
        Resource::new(
            "Introduction to Kubernetes (edX)",
            "https://www.edx.org/course/introduction-to-kubernetes",
            ResourceKind::Course,
            "Free course from the Linux Foundation that provides an introduction to Kubernetes.",
        ),
        Resource::new(
            "Kubernetes The Hard Way",
            "https://github.com/kelseyhightower/kubernetes-the-hard-way",
            ResourceKind::Github,
            "Step-by-step guide to bootstrap a Kubernetes cluster from scratch by Kelsey \
             Hightower.",
        ),
    ])
}

fn what_is_kubernetes() -> Lesson {
    Lesson::new(
        slug("what-is-kubernetes"),
        "What is Kubernetes?",
        minutes(15),
        vec![
            text(
                "<h2>What is Kubernetes?</h2><p>Kubernetes (K8s) is an open-source platform \
                 designed to automate deploying, scaling, and operating application \
                 containers. It groups containers that make up an application into logical \
                 units for easy management and discovery.</p><p>The name Kubernetes originates \
                 from Greek, meaning 'helmsman' or 'pilot'. K8s is an abbreviation derived by \
                 replacing the 8 letters 'ubernete' with '8'.</p>",
            ),
            diagram("k8s-architecture"),
            text(
                "<h3>Key Features</h3><ul><li><strong>Service discovery and load \
                 balancing</strong>: Kubernetes can expose a container using a DNS name or its \
                 own IP address, and load-balance traffic across a set of Pods.</li><li>\
                 <strong>Self-healing</strong>: Kubernetes restarts containers that fail, \
                 replaces containers, and kills containers that don't respond to health \
                 checks.</li><li><strong>Automated rollouts and rollbacks</strong>: describe \
                 the desired state and Kubernetes changes the actual state at a controlled \
                 rate.</li><li><strong>Automatic bin packing</strong>: Kubernetes fits \
                 containers onto nodes to make the best use of cluster resources.</li></ul>",
            ),
        ],
    )
    .with_resources(vec![Resource::new(
        "What is Kubernetes?",
        "https://kubernetes.io/docs/concepts/overview/what-is-kubernetes/",
        ResourceKind::Documentation,
        "Official Kubernetes documentation explaining what Kubernetes is and its core concepts.",
    )])
}

fn kubernetes_history() -> Lesson {
    Lesson::new(
        slug("kubernetes-history"),
        "History and Evolution of Kubernetes",
        minutes(15),
        vec![
            text(
                "<h2>From Borg to Kubernetes</h2><p>Kubernetes builds on more than a decade of \
                 experience running production workloads at Google on the internal Borg and \
                 Omega systems. Google open-sourced Kubernetes in 2014 and donated it to the \
                 newly formed Cloud Native Computing Foundation (CNCF) in 2015.</p>",
            ),
            text(
                "<h3>Milestones</h3><ul><li><strong>2014</strong>: Kubernetes announced and \
                 open-sourced by Google.</li><li><strong>2015</strong>: Kubernetes 1.0 \
                 released; the CNCF is founded with Kubernetes as its seed project.</li><li>\
                 <strong>2017</strong>: major cloud providers ship managed Kubernetes \
                 offerings.</li><li><strong>2018</strong>: Kubernetes becomes the first \
                 project to graduate from the CNCF.</li></ul>",
            ),
        ],
    )
    .with_resources(vec![Resource::new(
        "Kubernetes: The Documentary",
        "https://www.youtube.com/watch?v=BE77h7dmoQU",
        ResourceKind::Video,
        "A two-part documentary on the origins of Kubernetes.",
    )])
}

fn kubernetes_use_cases() -> Lesson {
    Lesson::new(
        slug("kubernetes-use-cases"),
        "Common Use Cases for Kubernetes",
        minutes(12),
        vec![text(
            "<h2>Common Use Cases</h2><p>Kubernetes shines wherever many containers must be \
             deployed, scaled, and kept healthy without manual intervention.</p><ul><li>\
             <strong>Microservices</strong>: deploy and scale many small services \
             independently, with service discovery built in.</li><li><strong>CI/CD \
             pipelines</strong>: spin up isolated, reproducible build and test environments on \
             demand.</li><li><strong>Batch and machine-learning workloads</strong>: schedule \
             jobs onto spare cluster capacity.</li><li><strong>Hybrid and multi-cloud</strong>: \
             one deployment model across on-premises and public clouds.</li></ul>",
        )],
    )
}

fn kubernetes_benefits() -> Lesson {
    Lesson::new(
        slug("kubernetes-benefits"),
        "Benefits and Challenges of Kubernetes",
        minutes(12),
        vec![
            text(
                "<h2>Benefits</h2><ul><li><strong>Portability</strong>: the same manifests run \
                 on any conformant cluster.</li><li><strong>Scalability</strong>: horizontal \
                 scaling with a single command or automatically from load.</li><li><strong>\
                 Resilience</strong>: failed containers are restarted and rescheduled without \
                 operator action.</li></ul>",
            ),
            text(
                "<h2>Challenges</h2><p>Kubernetes is not free of cost: its learning curve is \
                 steep, clusters add operational overhead, and small applications may be \
                 simpler to run on a managed platform. Evaluate whether the orchestration \
                 benefits outweigh the complexity for your workload.</p>",
            ),
        ],
    )
}

fn quick_start() -> Lesson {
    Lesson::new(
        slug("quick-start"),
        "Quick Start Guide",
        minutes(20),
        vec![
            text(
                "<h2>Quick Start</h2><p>The fastest way to try Kubernetes locally is Minikube, \
                 which runs a single-node cluster inside a VM or container on your \
                 workstation. You interact with it through <code>kubectl</code>, the \
                 Kubernetes command-line tool.</p>",
            ),
            code(
                "# For macOS using Homebrew\n$ brew install kubectl\n\n# For Linux\n$ curl -LO \
                 \"https://dl.k8s.io/release/stable/bin/linux/amd64/kubectl\"\n$ sudo install \
                 -o root -g root -m 0755 kubectl /usr/local/bin/kubectl\n\n# Verify \
                 installation\n$ kubectl version --client",
            ),
            code(
                "# Start Minikube with default settings\n$ minikube start\n\n# Create a \
                 deployment\n$ kubectl create deployment hello-node \
                 --image=k8s.gcr.io/echoserver:1.4\n\n# Expose it as a service\n$ kubectl \
                 expose deployment hello-node --type=LoadBalancer --port=8080\n\n# Clean up\n$ \
                 kubectl delete service hello-node\n$ kubectl delete deployment hello-node\n$ \
                 minikube stop",
            ),
        ],
    )
    .with_resources(vec![Resource::new(
        "Kubernetes Basics Interactive Tutorial",
        "https://kubernetes.io/docs/tutorials/kubernetes-basics/",
        ResourceKind::Tutorial,
        "Interactive tutorial that teaches Kubernetes basics with a series of hands-on modules.",
    )])
}

fn kubernetes_components() -> Lesson {
    Lesson::new(
        slug("kubernetes-components"),
        "Core Kubernetes Components",
        minutes(15),
        vec![
            text(
                "<h2>Core Components</h2><p>A Kubernetes cluster consists of a control plane, \
                 which makes global decisions about the cluster, and a set of worker nodes \
                 that run the actual application Pods.</p>",
            ),
            diagram("k8s-components"),
            text(
                "<p>The control plane components are <code>kube-apiserver</code>, \
                 <code>etcd</code>, <code>kube-scheduler</code>, and \
                 <code>kube-controller-manager</code>. Every node runs <code>kubelet</code>, \
                 <code>kube-proxy</code>, and a container runtime.</p>",
            ),
        ],
    )
}
