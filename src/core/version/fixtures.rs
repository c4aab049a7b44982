// Shared test fixtures.

use super::VersionDescriptor;

pub const VERSION_JSON: &str = r#"{
    "arguments": { "game": ["--username", "${auth_player_name}"], "jvm": [] },
    "assetIndex": { "id": "5", "sha1": "abc", "size": 1, "totalSize": 2, "url": "https://example.com/5.json" },
    "assets": "5",
    "complianceLevel": 1,
    "downloads": {
        "client": { "sha1": "c0ffee", "size": 23028853, "url": "https://example.com/client.jar" },
        "server": { "sha1": "beef", "size": 49150256, "url": "https://example.com/server.jar" },
        "client_mappings": { "sha1": "aa", "size": 10, "url": "https://example.com/client.txt" }
    },
    "id": "1.20.1",
    "javaVersion": { "component": "java-runtime-gamma", "majorVersion": 17 },
    "libraries": [
        { "name": "com.mojang:logging:1.1.1", "downloads": { "artifact": { "path": "a", "sha1": "b", "size": 1, "url": "c" } } },
        { "name": "org.lwjgl:lwjgl:3.3.1", "natives": { "linux": "natives-linux" }, "extract": { "exclude": ["META-INF/"] },
          "rules": [{ "action": "allow" }, { "action": "disallow", "os": { "name": "osx" } }] }
    ],
    "logging": { "client": { "argument": "-Dlog4j.configurationFile=${path}", "type": "log4j2-xml" } },
    "mainClass": "net.minecraft.client.main.Main",
    "minimumLauncherVersion": 21,
    "releaseTime": "2023-06-12T13:25:51+00:00",
    "time": "2023-06-12T13:25:51+00:00",
    "type": "release"
}"#;

pub fn sample() -> VersionDescriptor {
    serde_json::from_str(VERSION_JSON).unwrap()
}
