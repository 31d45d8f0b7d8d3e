#![allow(dead_code)]

use bindi::{args, Config, Container, Inject, InjectCloned};
use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

struct A(Arc<B>, Arc<C>);
struct B(i32);
struct C(Arc<CA>);
struct CA(Arc<CAA>);
struct CAA(Arc<CAAA>);
struct CAAA;

#[inline]
fn container_with_config(config: Config) -> Container {
    let container = Container::new();
    container
        .bind_factory_with_config("caaa", || Ok(CAAA), args![], config)
        .bind_factory_with_config("caa", |Inject(caaa): Inject<CAAA>| Ok(CAA(caaa)), args![@"caaa"], config)
        .bind_factory_with_config("ca", |Inject(caa): Inject<CAA>| Ok(CA(caa)), args![@"caa"], config)
        .bind_factory_with_config("c", |Inject(ca): Inject<CA>| Ok(C(ca)), args![@"ca"], config)
        .bind_factory_with_config("b", |InjectCloned(n): InjectCloned<i32>| Ok(B(n)), args![2i32], config)
        .bind_factory_with_config(
            "a",
            |Inject(b): Inject<B>, Inject(c): Inject<C>| Ok(A(b, c)),
            args![@"b", @"c"],
            config,
        );
    container
}

#[inline]
fn container_get(container: &Container) {
    let _ = container.get::<A>("a").unwrap();
}

fn criterion_benchmark(c: &mut Criterion) {
    let singleton_container = container_with_config(Config::singleton());
    let transient_container = container_with_config(Config::transient());

    c.bench_function("container_bind", |b| b.iter(|| container_with_config(Config::default())))
        .bench_function("container_get_singleton", |b| {
            container_get(&singleton_container);
            b.iter(|| container_get(&singleton_container))
        })
        .bench_function("container_get_transient", |b| b.iter(|| container_get(&transient_container)))
        .bench_function("container_get_singleton_after_rebind", |b| {
            b.iter(|| {
                let container = container_with_config(Config::singleton());
                container_get(&container);
                container.bind_value("caaa", CAAA);
                container_get(&container);
            })
        });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
