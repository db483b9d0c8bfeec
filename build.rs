fn main() {
    println!("cargo:rerun-if-changed=proto/rendezvous.proto");

    std::fs::create_dir_all("src/proto").expect("Failed to create src/proto.");

    protobuf_codegen::Codegen::new()
        .pure()
        .customize(protobuf_codegen::Customize::default().gen_mod_rs(true))
        .out_dir("src/proto")
        .inputs(["proto/rendezvous.proto"])
        .include("proto")
        .run()
        .expect("Codegen failed.");
}
