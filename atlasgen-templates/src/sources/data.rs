/// The Retrofit API interface for the feature's data layer.
pub(crate) const API_INTERFACE: &str = r##"package com.sword.atlas.feature.{{slug}}.data.api

import com.sword.atlas.core.model.ApiResponse
import com.sword.atlas.feature.{{slug}}.data.model.{{symbol}}Response
import retrofit2.http.GET

/**
 * {{symbol}} API definition.
 */
interface {{symbol}}Api {

    @GET("{{slug}}")
    suspend fun get{{symbol}}(): ApiResponse<{{symbol}}Response>
}
"##;

/// The response data model for the feature's data layer.
pub(crate) const RESPONSE_MODEL: &str = r##"package com.sword.atlas.feature.{{slug}}.data.model

/**
 * {{symbol}} response model.
 */
data class {{symbol}}Response(
    val id: String,
    val name: String,
    val description: String
)
"##;

/// The repository bridging the API into the domain layer.
pub(crate) const REPOSITORY: &str = r##"package com.sword.atlas.feature.{{slug}}.data.repository

import com.sword.atlas.core.common.base.BaseRepository
import com.sword.atlas.core.model.Result
import com.sword.atlas.feature.{{slug}}.data.api.{{symbol}}Api
import com.sword.atlas.feature.{{slug}}.data.model.{{symbol}}Response
import javax.inject.Inject
import javax.inject.Singleton

/**
 * {{symbol}} repository.
 */
@Singleton
class {{symbol}}Repository @Inject constructor(
    private val api: {{symbol}}Api
) : BaseRepository() {

    suspend fun get{{symbol}}(): Result<{{symbol}}Response> {
        return executeRequest {
            api.get{{symbol}}()
        }
    }
}
"##;
